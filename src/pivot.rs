//! Pivot selection, shared by quicksort and quickselect.
//!
//! None of the strategies influence the partition itself, they only decide which element's key
//! the active range is partitioned around.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used by [`SeededRandom::default`].
pub const DEFAULT_SEED: u64 = 0x6d65_7263_6861_6e74;

pub trait PivotStrategy {
    fn name(&self) -> &'static str;

    /// Selects a pivot from `v` and returns its position.
    ///
    /// `v` must not be empty. The returned position is always in-bounds.
    fn choose_pivot<T, K, F>(&mut self, v: &[T], key: &mut F) -> usize
    where
        K: Ord,
        F: FnMut(&T) -> K;
}

/// Always picks the first element. Deterministic and simple, but quadratic on sorted and
/// reverse sorted inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstElement;

impl PivotStrategy for FirstElement {
    fn name(&self) -> &'static str {
        "first"
    }

    #[inline]
    fn choose_pivot<T, K, F>(&mut self, _v: &[T], _key: &mut F) -> usize
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        0
    }
}

/// Picks the median of the first, middle and last element.
#[derive(Clone, Copy, Debug, Default)]
pub struct MedianOfThree;

impl PivotStrategy for MedianOfThree {
    fn name(&self) -> &'static str {
        "median_of_three"
    }

    fn choose_pivot<T, K, F>(&mut self, v: &[T], key: &mut F) -> usize
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let len = v.len();
        if len < 3 {
            return 0;
        }

        let (a, b, c) = (0, len / 2, len - 1);
        let (ka, kb, kc) = (key(&v[a]), key(&v[b]), key(&v[c]));

        // If x=y=1 then a < b, c and we want min(b, c). If x=y=0 then b, c <= a and we want
        // max(b, c). Toggling the outcome of b < c with x gives both.
        let x = ka < kb;
        let y = ka < kc;
        if x == y {
            let z = kb < kc;
            if z ^ x {
                c
            } else {
                b
            }
        } else {
            a
        }
    }
}

/// Picks a uniformly random element, from a seeded generator so runs are reproducible.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl PivotStrategy for SeededRandom {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_pivot<T, K, F>(&mut self, v: &[T], _key: &mut F) -> usize
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.rng.gen_range(0..v.len())
    }
}
