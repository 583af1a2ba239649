//! Finds the optimal location for a new merchant on a one dimensional road, such that the sum
//! of the distances to all other merchants is minimized.
//!
//! On a line the sum of absolute distances is minimized by the median, so the problem reduces
//! to finding the median location. Two paths are provided, both built on the same stable
//! three-way partition:
//!
//! - [`quicksort`], fully orders the merchants and indexes the middle ("slow").
//! - [`quickselect`], only narrows down on the middle rank ("fast").

/// Finds the median of a collection, where the median is the element at rank `len / 2` when
/// ordered by `key`. For even lengths this is the upper of the two middle elements, on a line
/// both minimize the sum of distances.
pub trait MedianFinder {
    fn name(&self) -> String;

    /// Returns `None` if `v` is empty.
    fn median_by_key<T, K, F>(&mut self, v: Vec<T>, key: F) -> Option<T>
    where
        K: Ord,
        F: FnMut(&T) -> K;
}

macro_rules! median_finder_impl {
    ($ty:ident, $name:expr) => {
        impl<P: crate::pivot::PivotStrategy> $ty<P> {
            pub fn new(pivot: P) -> Self {
                Self { pivot }
            }
        }

        impl<P: crate::pivot::PivotStrategy + Default> Default for $ty<P> {
            fn default() -> Self {
                Self::new(P::default())
            }
        }

        impl<P: crate::pivot::PivotStrategy> crate::MedianFinder for $ty<P> {
            fn name(&self) -> String {
                format!("{}_{}", $name, self.pivot.name())
            }

            #[inline]
            fn median_by_key<T, K, F>(&mut self, v: Vec<T>, key: F) -> Option<T>
            where
                K: Ord,
                F: FnMut(&T) -> K,
            {
                median_by_key(v, key, &mut self.pivot)
            }
        }
    };
}

pub(crate) use median_finder_impl;

pub mod distance;
pub mod error;
pub mod merchant;
pub mod partition;
pub mod pivot;
pub mod quickselect;
pub mod quicksort;
pub mod report;

pub use error::{MerchantError, Result};
pub use merchant::Merchant;

/// The chosen merchant together with the sum of distances from all other merchants to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub chosen: Merchant,
    pub total_distance: u128,
}

impl Solution {
    /// Pairs `chosen` with its sum of distances to `merchants`.
    pub fn new(chosen: Merchant, merchants: &[Merchant]) -> Self {
        let total_distance = distance::total_distance(&chosen, merchants);
        Self {
            chosen,
            total_distance,
        }
    }
}

/// Finds the optimal location among `merchants` using `finder`.
///
/// Returns `None` if there are no merchants.
pub fn solve<M: MedianFinder>(finder: &mut M, merchants: &[Merchant]) -> Option<Solution> {
    let chosen = finder.median_by_key(merchants.to_vec(), Merchant::location)?;

    log::debug!(
        "{} chose {} out of {} merchants",
        finder.name(),
        chosen,
        merchants.len()
    );

    Some(Solution::new(chosen, merchants))
}
