//! Out-of-place quicksort on top of the stable three-way partition.
//!
//! The classic formulation is `sort(less) + equal + sort(greater)`. Recursing on that directly
//! needs one stack frame per level, and with a first element pivot an already sorted input of
//! length `n` has `n` levels. Instead the pending work lives on an explicit heap allocated
//! stack, so the depth is only limited by memory.

use crate::partition::partition_by_key;
use crate::pivot::{FirstElement, PivotStrategy};

/// Median finder that sorts everything and then indexes the middle.
pub struct QuickSortMedian<P: PivotStrategy = FirstElement> {
    pivot: P,
}

crate::median_finder_impl!(QuickSortMedian, "quicksort");

enum Work<T> {
    /// Still has to be sorted.
    Sort(Vec<T>),
    /// Already in final position relative to everything else, append as is.
    Emit(Vec<T>),
}

/// Sorts `v` by `key` with a first element pivot.
///
/// The sort is stable, elements with equal keys keep their relative order.
pub fn sort_by_key<T, K, F>(v: Vec<T>, key: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by_key_with(v, key, &mut FirstElement)
}

/// Sorts `v` by `key`, choosing pivots with `pivot`.
///
/// The sort is stable regardless of pivot strategy, elements with equal keys keep their
/// relative order. Worst case `O(N^2)` comparisons, with the default strategy that worst case
/// is an already sorted input.
pub fn sort_by_key_with<T, K, F, P>(v: Vec<T>, mut key: F, pivot: &mut P) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
    P: PivotStrategy,
{
    let mut sorted = Vec::with_capacity(v.len());
    let mut stack = vec![Work::Sort(v)];
    let mut max_depth = 0;

    while let Some(work) = stack.pop() {
        max_depth = max_depth.max(stack.len() + 1);

        let v = match work {
            Work::Emit(v) => {
                sorted.extend(v);
                continue;
            }
            Work::Sort(v) => v,
        };

        match v.len() {
            0 => continue,
            1 => {
                sorted.extend(v);
                continue;
            }
            _ => {}
        }

        let pivot_pos = pivot.choose_pivot(&v, &mut key);
        let pivot_key = key(&v[pivot_pos]);
        let groups = partition_by_key(v, &pivot_key, &mut key);

        // LIFO, so push in reverse of the output order.
        stack.push(Work::Sort(groups.greater));
        stack.push(Work::Emit(groups.equal));
        stack.push(Work::Sort(groups.less));
    }

    log::trace!(
        "quicksort_{} sorted {} elements, max work stack depth {}",
        pivot.name(),
        sorted.len(),
        max_depth
    );

    sorted
}

fn median_by_key<T, K, F, P>(v: Vec<T>, key: F, pivot: &mut P) -> Option<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
    P: PivotStrategy,
{
    if v.is_empty() {
        return None;
    }

    let mid = v.len() / 2;
    let sorted = sort_by_key_with(v, key, pivot);
    sorted.into_iter().nth(mid)
}
