//! Conformance suites, instantiated per implementation with [`crate::instantiate_sort_tests`]
//! and [`crate::instantiate_select_tests`].
//!
//! Elements are `(key, id)` pairs with unique ids, ordered by key only. Comparing against the
//! stable `slice::sort_by_key` therefore checks stability as well as order.

use crate::patterns;
use crate::{Select, Sort};

#[cfg(not(feature = "large_test_sizes"))]
pub const TEST_SIZES: [usize; 17] = [0, 1, 2, 3, 4, 5, 7, 8, 10, 15, 16, 20, 24, 33, 50, 100, 280];

#[cfg(feature = "large_test_sizes")]
pub const TEST_SIZES: [usize; 20] = [
    0, 1, 2, 3, 4, 5, 7, 8, 10, 15, 16, 20, 24, 33, 50, 100, 280, 400, 1_000, 4_000,
];

type Elem = (i64, usize);

fn key(e: &Elem) -> i64 {
    e.0
}

fn tag(keys: Vec<i64>) -> Vec<Elem> {
    keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect()
}

fn expected_sorted(v: &[Elem]) -> Vec<Elem> {
    let mut expected = v.to_vec();
    expected.sort_by_key(key);
    expected
}

fn all_patterns(len: usize) -> Vec<(&'static str, Vec<i64>)> {
    vec![
        ("random", patterns::random(len)),
        ("random_d4", patterns::random_uniform(len, 0..4)),
        ("random_d20", patterns::random_uniform(len, 0..20)),
        ("random_z1", patterns::random_zipf(len, 1.0)),
        ("random_binary", patterns::random_binary(len)),
        ("extreme", patterns::extreme(len)),
        ("all_equal", patterns::all_equal(len)),
        ("ascending", patterns::ascending(len)),
        ("descending", patterns::descending(len)),
        ("saw_ascending", patterns::saw_ascending(len, 5)),
        ("pipe_organ", patterns::pipe_organ(len)),
    ]
}

// --- Sort ---

pub fn sort_basic<S: Sort>() {
    assert!(S::sort_by_key(Vec::<Elem>::new(), key).is_empty());
    assert_eq!(S::sort_by_key(vec![(3, 0)], key), vec![(3, 0)]);
    assert_eq!(
        S::sort_by_key(vec![(5, 0), (1, 1), (3, 2)], key),
        vec![(1, 1), (3, 2), (5, 0)]
    );
}

pub fn sort_patterns<S: Sort>() {
    for len in TEST_SIZES {
        for (name, keys) in all_patterns(len) {
            let v = tag(keys);
            let expected = expected_sorted(&v);
            let sorted = S::sort_by_key(v, key);
            assert_eq!(sorted, expected, "{} pattern {name} len {len}", S::name());
        }
    }
}

pub fn sort_idempotent<S: Sort>() {
    for len in TEST_SIZES {
        let v = tag(patterns::random_uniform(len, 0..10));
        let once = S::sort_by_key(v, key);
        let twice = S::sort_by_key(once.clone(), key);
        assert_eq!(once, twice, "{} len {len}", S::name());
    }
}

pub fn sort_keeps_equal_in_order<S: Sort>() {
    // Every element shares the key, any movement breaks stability.
    let v = tag(patterns::all_equal(100));
    assert_eq!(S::sort_by_key(v.clone(), key), v);
}

pub fn sort_other_key_types<S: Sort>() {
    let words = vec!["pear", "fig", "apple", "kiwi", "banana"];
    let sorted = S::sort_by_key(words, |w| w.to_string());
    assert_eq!(sorted, vec!["apple", "banana", "fig", "kiwi", "pear"]);

    let by_len = S::sort_by_key(vec!["pear", "fig", "apple", "kiwi"], |w| w.len());
    assert_eq!(by_len, vec!["fig", "pear", "kiwi", "apple"]);
}

// --- Select ---

pub fn select_basic<S: Select>() {
    assert_eq!(S::select_nth_by_key(Vec::<Elem>::new(), 0, key), None);
    assert_eq!(S::select_nth_by_key(vec![(3, 0)], 0, key), Some((3, 0)));
    assert_eq!(S::select_nth_by_key(vec![(3, 0)], 1, key), None);
    assert_eq!(
        S::select_nth_by_key(vec![(5, 0), (1, 1), (3, 2)], 1, key),
        Some((3, 2))
    );
}

pub fn select_out_of_range<S: Select>() {
    for len in [0, 1, 2, 10] {
        let v = tag(patterns::random(len));
        assert_eq!(S::select_nth_by_key(v.clone(), len, key), None);
        assert_eq!(S::select_nth_by_key(v, len + 7, key), None);
    }
}

pub fn select_all_ranks<S: Select>() {
    // Small enough to try every rank.
    for len in TEST_SIZES.into_iter().filter(|&len| len <= 100) {
        for (name, keys) in all_patterns(len) {
            let v = tag(keys);
            let expected = expected_sorted(&v);
            for (k, want) in expected.iter().enumerate() {
                let got = S::select_nth_by_key(v.clone(), k, key);
                assert_eq!(
                    got.as_ref(),
                    Some(want),
                    "{} pattern {name} len {len} k {k}",
                    S::name()
                );
            }
        }
    }
}

pub fn select_median<S: Select>() {
    for len in TEST_SIZES {
        for (name, keys) in all_patterns(len) {
            let v = tag(keys);
            let expected = expected_sorted(&v).get(len / 2).copied();
            let got = S::select_nth_by_key(v, len / 2, key);
            assert_eq!(got, expected, "{} pattern {name} len {len}", S::name());
        }
    }
}

pub fn select_extremes<S: Select>() {
    for len in TEST_SIZES.into_iter().filter(|&len| len > 0) {
        let v = tag(patterns::random(len));
        let expected = expected_sorted(&v);
        assert_eq!(S::select_nth_by_key(v.clone(), 0, key), expected.first().copied());
        assert_eq!(S::select_nth_by_key(v, len - 1, key), expected.last().copied());
    }
}

#[macro_export]
macro_rules! sort_test_fn {
    ($prefix:ident, $sort_impl:ty, $test_fn_name:ident) => {
        $crate::paste::paste! {
            #[test]
            fn [<$prefix _ $test_fn_name>]() {
                $crate::tests::$test_fn_name::<$sort_impl>();
            }
        }
    };
}

/// Instantiates the sort suite for `$sort_impl`, test names are prefixed with `$prefix`.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($prefix:ident, $sort_impl:ty) => {
        $crate::sort_test_fn!($prefix, $sort_impl, sort_basic);
        $crate::sort_test_fn!($prefix, $sort_impl, sort_patterns);
        $crate::sort_test_fn!($prefix, $sort_impl, sort_idempotent);
        $crate::sort_test_fn!($prefix, $sort_impl, sort_keeps_equal_in_order);
        $crate::sort_test_fn!($prefix, $sort_impl, sort_other_key_types);
    };
}

/// Instantiates the select suite for `$select_impl`, test names are prefixed with `$prefix`.
#[macro_export]
macro_rules! instantiate_select_tests {
    ($prefix:ident, $select_impl:ty) => {
        $crate::sort_test_fn!($prefix, $select_impl, select_basic);
        $crate::sort_test_fn!($prefix, $select_impl, select_out_of_range);
        $crate::sort_test_fn!($prefix, $select_impl, select_all_ranks);
        $crate::sort_test_fn!($prefix, $select_impl, select_median);
        $crate::sort_test_fn!($prefix, $select_impl, select_extremes);
    };
}
