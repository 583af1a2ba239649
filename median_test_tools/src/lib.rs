pub mod patterns;
pub mod tests;

#[doc(hidden)]
pub use paste;

pub trait Sort {
    fn name() -> String;

    /// Must return a permutation of `v`, ordered by `key`.
    fn sort_by_key<T, K, F>(v: Vec<T>, key: F) -> Vec<T>
    where
        K: Ord,
        F: FnMut(&T) -> K;
}

pub trait Select {
    fn name() -> String;

    /// Must return the element at rank `k` of `v` ordered by `key`, or `None` if
    /// `k >= v.len()`.
    fn select_nth_by_key<T, K, F>(v: Vec<T>, k: usize, key: F) -> Option<T>
    where
        K: Ord,
        F: FnMut(&T) -> K;
}
