//! Finds the optimal location for a new merchant.
//!
//! Run:
//! ```text
//! $ merchants [slow|fast] <input-file>
//! ```
//! Set `MERCHANTS_LOG=debug` to see what is going on.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use merchants_rs::merchant::read_merchants;
use merchants_rs::pivot::{FirstElement, MedianOfThree, PivotStrategy, SeededRandom, DEFAULT_SEED};
use merchants_rs::quickselect::QuickSelectMedian;
use merchants_rs::quicksort::QuickSortMedian;
use merchants_rs::report::{self, Report, SearchType};
use merchants_rs::Merchant;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PivotKind {
    First,
    MedianOfThree,
    Random,
}

/// Find the location minimizing the sum of distances to all merchants
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// `slow` sorts everything, anything else (conventionally `fast`) uses quickselect
    #[arg(value_parser = parse_search_type)]
    search_type: SearchType,
    /// File with one `<name> <location>` pair per line
    file: PathBuf,
    /// How pivots are chosen
    #[arg(long, value_enum, default_value_t = PivotKind::First)]
    pivot: PivotKind,
    /// Seed for the random pivot strategy
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn parse_search_type(arg: &str) -> Result<SearchType, std::convert::Infallible> {
    Ok(SearchType::from_arg(arg))
}

fn run_with<P: PivotStrategy>(
    search_type: SearchType,
    pivot: P,
    merchants: &[Merchant],
) -> Report {
    match search_type {
        SearchType::Slow => report::run(search_type, &mut QuickSortMedian::new(pivot), merchants),
        SearchType::Fast => report::run(search_type, &mut QuickSelectMedian::new(pivot), merchants),
    }
}

fn main() -> anyhow::Result<()> {
    if std::env::var("MERCHANTS_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MERCHANTS_LOG")
            .write_style("MERCHANTS_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let args = Args::parse();
    log::debug!("arguments: {:?}", args);

    let merchants = read_merchants(&args.file)
        .with_context(|| format!("failed to load merchants from {}", args.file.display()))?;

    let report = match args.pivot {
        PivotKind::First => run_with(args.search_type, FirstElement, &merchants),
        PivotKind::MedianOfThree => run_with(args.search_type, MedianOfThree, &merchants),
        PivotKind::Random => run_with(args.search_type, SeededRandom::new(args.seed), &merchants),
    };

    print!("{report}");

    Ok(())
}
