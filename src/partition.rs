//! Shuffling and partitioning shared by quicksort and quickselect.

use rand::Rng;
use std::cmp::Ordering;

/// Uniformly permutes `v` in place (Fisher–Yates).
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen index in `0..=i`.
pub fn shuffle<T, R: Rng + ?Sized>(v: &mut [T], rng: &mut R) {
    for i in (1..v.len()).rev() {
        let r = rng.random_range(0..=i);
        v.swap(i, r);
    }
}

/// Hoare partition around `v[0]`.
///
/// Returns the final pivot index `p`. Afterwards no element in `v[..p]` is
/// greater than the pivot and no element in `v[p + 1..]` is less than it.
/// Elements equal to the pivot may land on either side.
///
/// `v` must not be empty.
pub fn partition<T, F>(v: &mut [T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let hi = v.len() - 1;
    let mut i = 1;
    let mut j = hi;

    // The pivot stays at index 0 for the whole scan: `i` starts past it and
    // `j` cannot move below it since the pivot never compares greater than itself.
    loop {
        while i <= hi && cmp(&v[i], &v[0]) == Ordering::Less {
            i += 1;
        }
        while cmp(&v[j], &v[0]) == Ordering::Greater {
            j -= 1;
        }
        if i >= j {
            break;
        }
        v.swap(i, j);
        i += 1;
        j -= 1;
    }

    v.swap(0, j);
    j
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_partitioned(v: &[i32], p: usize) {
        let pivot = v[p];
        assert!(v[..p].iter().all(|x| *x <= pivot), "{v:?} around {p}");
        assert!(v[p + 1..].iter().all(|x| *x >= pivot), "{v:?} around {p}");
    }

    #[test]
    fn test_partition_single() {
        let mut v = [7];
        assert_eq!(partition(&mut v, &mut i32::cmp), 0);
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut v = [5, 9, 1, 7, 3, 8, 2];
        let p = partition(&mut v, &mut i32::cmp);
        assert_eq!(v[p], 5);
        assert_eq!(p, 3);
        assert_partitioned(&v, p);
    }

    #[test]
    fn test_partition_all_equal() {
        let mut v = [4; 9];
        let p = partition(&mut v, &mut i32::cmp);
        assert!(p < v.len());
        assert_partitioned(&v, p);
    }

    #[test]
    fn test_partition_extremes() {
        let mut v = [1, 5, 4, 3, 2];
        assert_eq!(partition(&mut v, &mut i32::cmp), 0);

        let mut v = [9, 5, 4, 3, 2];
        let p = partition(&mut v, &mut i32::cmp);
        assert_eq!(p, 4);
        assert_partitioned(&v, p);
    }

    #[test]
    fn test_partition_random() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..64 {
            let mut v: Vec<i32> = (0..len).map(|_| rng.random_range(0..10)).collect();
            let p = partition(&mut v, &mut i32::cmp);
            assert_partitioned(&v, p);
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut v: Vec<u32> = (0..100).collect();
        shuffle(&mut v, &mut rng);

        let mut sorted = v.clone();
        sorted.sort();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
        assert_ne!(v, sorted);
    }

    #[test]
    fn test_shuffle_seeded_is_reproducible() {
        let mut a: Vec<u32> = (0..50).collect();
        let mut b = a.clone();
        shuffle(&mut a, &mut StdRng::seed_from_u64(3));
        shuffle(&mut b, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_trivial() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut one = [1];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, [1]);
    }
}
