use ordkit::prelude::*;
use std::cell::Cell;
use std::cmp::Ordering;

// A caller-defined record with no `Ord` impl of its own.
#[derive(Clone, Debug, PartialEq)]
struct Task {
    priority: u32,
    label: &'static str,
}

fn task(priority: u32, label: &'static str) -> Task {
    Task { priority, label }
}

fn by_priority(a: &Task, b: &Task) -> Ordering {
    a.priority.cmp(&b.priority)
}

#[test]
fn test_merge_sort_is_stable() {
    let mut tasks = vec![
        task(2, "a"),
        task(1, "b"),
        task(2, "c"),
        task(1, "d"),
        task(3, "e"),
        task(2, "f"),
        task(1, "g"),
    ];

    sort_by(&mut tasks, by_priority, Variant::Merge);

    let labels: Vec<&str> = tasks.iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["b", "d", "g", "a", "c", "f", "e"]);
}

#[test]
fn test_merge_sort_is_stable_descending() {
    let mut tasks: Vec<Task> = (0..40)
        .map(|i| task(i % 5, ["w", "x", "y", "z"][(i % 4) as usize]))
        .collect();
    let original = tasks.clone();

    sort_by(&mut tasks, |a, b| by_priority(b, a), Variant::Merge);

    for p in 0..5 {
        let kept: Vec<&Task> = tasks.iter().filter(|t| t.priority == p).collect();
        let before: Vec<&Task> = original.iter().filter(|t| t.priority == p).collect();
        assert_eq!(kept, before, "priority {p} reordered");
    }
    assert!(tasks.windows(2).all(|w| w[0].priority >= w[1].priority));
}

#[test]
fn test_unstable_variants_still_group_keys() {
    // No stability is promised here; only the key order is checked.
    for variant in [Variant::Heap, Variant::Quick] {
        let mut tasks: Vec<Task> = (0..30).map(|i| task((i * 7) % 4, "t")).collect();
        sort_by(&mut tasks, by_priority, variant);
        assert!(tasks.windows(2).all(|w| w[0].priority <= w[1].priority));
        assert_eq!(tasks.len(), 30);
    }
}

#[test]
fn test_stateful_comparator() {
    let calls = Cell::new(0usize);
    let mut data: Vec<i32> = (0..64).rev().collect();

    sort_by(
        &mut data,
        |a, b| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        },
        Variant::Heap,
    );

    assert_eq!(data, (0..64).collect::<Vec<_>>());
    assert!(calls.get() > 0);
}

#[test]
fn test_projection_select() {
    let mut tasks = vec![task(40, "d"), task(10, "a"), task(30, "c"), task(20, "b")];
    let second = select_by(&mut tasks, 1, by_priority).unwrap();
    assert_eq!(second.label, "b");
}

#[test]
fn test_queue_of_records() {
    let mut pq = priority_queue(1, |a: &Task, b: &Task| b.priority.cmp(&a.priority));
    pq.insert(task(1, "low"));
    pq.insert(task(9, "urgent"));
    pq.insert(task(5, "normal"));

    assert_eq!(pq.peek().map(|t| t.label), Ok("urgent"));
    let order: Vec<&str> = pq.iter().map(|t| t.label).collect();
    assert_eq!(order, vec!["urgent", "normal", "low"]);
    assert_eq!(pq.len(), 3);
}

#[test]
fn test_float_total_order() {
    let mut data = vec![2.5f64, -1.0, 0.0, 3.75, -0.5];
    sort_by(&mut data, f64::total_cmp, Variant::Quick);
    assert_eq!(data, vec![-1.0, -0.5, 0.0, 2.5, 3.75]);
}
