//! Input patterns for keys.
//!
//! Every generator is deterministic for a given seed, see [`random_init_seed`].

use std::env;
use std::ops::Range;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;
use zipf::ZipfDistribution;

pub fn random(len: usize) -> Vec<i64> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>() as i64).collect()
}

pub fn random_uniform(len: usize, range: Range<i64>) -> Vec<i64> {
    // :.:.:.::

    let mut rng = new_rng();
    let dist = Uniform::from(range);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i64> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i64).collect()
}

pub fn random_binary(len: usize) -> Vec<i64> {
    random_uniform(len, 0..2)
}

pub fn extreme(len: usize) -> Vec<i64> {
    // Only the two extremes, sums of distances get as large as they can.

    let mut rng = new_rng();
    (0..len)
        .map(|_| if rng.gen::<bool>() { i64::MIN } else { i64::MAX })
        .collect()
}

pub fn all_equal(len: usize) -> Vec<i64> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i64> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i64).collect()
}

pub fn descending(len: usize) -> Vec<i64> {
    // :.
    // :::.
    // :::::.

    (0..len as i64).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i64> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let saw_len = (len / saw_count.max(1)).max(1);
    (0..len).map(|i| (i % saw_len) as i64).collect()
}

pub fn pipe_organ(len: usize) -> Vec<i64> {
    //   .:.
    // .:::::.

    let half = len / 2;
    (0..half as i64)
        .chain((0..(len - half) as i64).rev())
        .collect()
}

/// Set `OVERRIDE_SEED` to reproduce a failing run.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        let seed = env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|s| u64::from_str(&s).ok())
            .unwrap_or_else(|| thread_rng().gen());
        println!("Seed: {seed}");
        seed
    })
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
