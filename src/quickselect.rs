//! Quickselect on top of the stable three-way partition.
//!
//! Only the group containing the target rank is partitioned further, everything else is
//! dropped. Expected `O(N)`, worst case `O(N^2)` with the same pivot caveats as quicksort.

use crate::partition::partition_by_key;
use crate::pivot::{FirstElement, PivotStrategy};

/// Median finder that only narrows down on the middle rank.
pub struct QuickSelectMedian<P: PivotStrategy = FirstElement> {
    pivot: P,
}

crate::median_finder_impl!(QuickSelectMedian, "quickselect");

/// Returns the element at rank `k` of `v` ordered by `key`, using a first element pivot.
///
/// Returns `None` if `k >= v.len()`.
pub fn select_nth_by_key<T, K, F>(v: Vec<T>, k: usize, key: F) -> Option<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    select_nth_by_key_with(v, k, key, &mut FirstElement)
}

/// Returns the element at rank `k` of `v` ordered by `key`, choosing pivots with `pivot`.
///
/// The returned element is the same one a stable sort would place at index `k`, so for ties
/// this agrees with [`crate::quicksort::sort_by_key_with`] and not only in key.
///
/// Returns `None` if `k >= v.len()`.
pub fn select_nth_by_key_with<T, K, F, P>(
    mut v: Vec<T>,
    mut k: usize,
    mut key: F,
    pivot: &mut P,
) -> Option<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
    P: PivotStrategy,
{
    if k >= v.len() {
        return None;
    }

    let mut rounds = 0usize;

    loop {
        rounds += 1;

        // Loop invariant: k < v.len(), which also means v is never empty here.
        let pivot_pos = pivot.choose_pivot(&v, &mut key);
        let pivot_key = key(&v[pivot_pos]);
        let mut groups = partition_by_key(v, &pivot_key, &mut key);

        let num_lt = groups.less.len();
        let num_eq = groups.equal.len();

        if k < num_lt {
            v = groups.less;
        } else if k < num_lt + num_eq {
            log::trace!(
                "quickselect_{} found rank in {} rounds",
                pivot.name(),
                rounds
            );
            // The equal group keeps input order, so this is the element a stable sort would put
            // at rank k.
            return Some(groups.equal.swap_remove(k - num_lt));
        } else {
            k -= num_lt + num_eq;
            v = groups.greater;
        }
    }
}

fn median_by_key<T, K, F, P>(v: Vec<T>, key: F, pivot: &mut P) -> Option<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
    P: PivotStrategy,
{
    let mid = v.len() / 2;
    select_nth_by_key_with(v, mid, key, pivot)
}
