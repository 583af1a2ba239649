use std::fmt;
use std::time::{Duration, Instant};

use crate::merchant::Merchant;
use crate::{MedianFinder, Solution};

/// Which algorithm computed the median.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchType {
    /// Quicksort, then index the middle.
    Slow,
    /// Quickselect.
    Fast,
}

impl SearchType {
    /// `slow` selects quicksort, anything else quickselect.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "slow" {
            SearchType::Slow
        } else {
            SearchType::Fast
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchType::Slow => f.write_str("slow"),
            SearchType::Fast => f.write_str("fast"),
        }
    }
}

/// Everything printed after a run, in print order.
#[derive(Clone, Debug)]
pub struct Report {
    pub search_type: SearchType,
    pub num_merchants: usize,
    /// Time spent finding the median, file reading excluded.
    pub elapsed: Duration,
    pub solution: Option<Solution>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search type: {}", self.search_type)?;
        writeln!(f, "Number of merchants: {}", self.num_merchants)?;
        writeln!(f, "Elapsed time: {} seconds", self.elapsed.as_secs_f64())?;
        match &self.solution {
            Some(solution) => {
                writeln!(f, "Optimal store location: {}", solution.chosen)?;
                writeln!(f, "Sum of distances: {}", solution.total_distance)
            }
            None => writeln!(f, "No optimal location found"),
        }
    }
}

/// Solves for `merchants` with `finder`. Only the median search is timed, neither copying the
/// input nor summing the distances is.
pub fn run<M: MedianFinder>(
    search_type: SearchType,
    finder: &mut M,
    merchants: &[Merchant],
) -> Report {
    let candidates = merchants.to_vec();

    let start = Instant::now();
    let chosen = finder.median_by_key(candidates, Merchant::location);
    let elapsed = start.elapsed();

    let solution = chosen.map(|chosen| Solution::new(chosen, merchants));

    log::info!("{} took {:?}", finder.name(), elapsed);

    Report {
        search_type,
        num_merchants: merchants.len(),
        elapsed,
        solution,
    }
}
