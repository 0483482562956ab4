pub mod progress_bar;

use std::time::Duration;

use clap::{Parser, Subcommand};
use num_format::{Locale, ToFormattedString};
use prettytable::{format::consts::FORMAT_NO_LINESEP_WITH_TITLE, row, Cell, Row, Table};

use crate::perm::bench::BenchResult;

#[derive(Parser)]
#[clap(name = "seekrs")]
#[clap(about = "Search directory trees and generate string permutations")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recursively search a directory for files with a matching name
    #[command(
        about = "Search a directory tree",
        long_about = "Walk a directory tree and print the path of every file whose name matches the target"
    )]
    Find {
        directory: String,
        filename: String,

        /// Match the filename regardless of letter case
        #[arg(short, long, default_value_t = false)]
        ignore_case: bool,
    },

    /// Generate all permutations of a string
    #[command(
        about = "Permute a string",
        long_about = "Print every positional permutation of the given string; reads one line from stdin when no string is given"
    )]
    Permute { input: Option<String> },

    /// Compare the permutation strategies on fixed sample inputs
    #[command(
        about = "Time the permutation strategies",
        long_about = "Run the recursive, unique, and iterative strategies over sample strings and print a timing table"
    )]
    Bench,
}

/// Builds the summary table printed after a benchmark run, one row per
/// strategy/input pair.
///
/// Permutation counts are locale-formatted and durations rendered in seconds,
/// matching the per-run lines the harness prints as it goes.
///
/// # Arguments
///
/// * `results` - The timings collected by `run_speed_test`.
///
/// # Example
///
/// ```
/// use seekrs::cmd::build_bench_summary_table;
/// use seekrs::perm::bench::BenchResult;
/// use std::time::Duration;
///
/// let results = vec![BenchResult {
///     description: "All unique characters, 3 characters",
///     strategy: "recursive",
///     permutations: 6,
///     elapsed: Duration::from_micros(12),
/// }];
///
/// println!("{}", build_bench_summary_table(&results));
/// ```
pub fn build_bench_summary_table(results: &[BenchResult]) -> String {
    let mut table = Table::new();
    table.set_format(*FORMAT_NO_LINESEP_WITH_TITLE);

    table.set_titles(Row::new(vec![
        Cell::new("Description").style_spec("bFc"),
        Cell::new("Strategy").style_spec("bFc"),
        Cell::new("Permutations").style_spec("bFc"),
        Cell::new("Time").style_spec("bFc"),
    ]));

    for result in results {
        table.add_row(row![
            result.description,
            result.strategy,
            result.permutations.to_formatted_string(&Locale::en),
            format_elapsed(result.elapsed)
        ]);
    }

    table.to_string()
}

/// Renders an elapsed duration as fractional seconds
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.6}s", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests;
