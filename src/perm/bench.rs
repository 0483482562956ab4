use std::time::{Duration, Instant};

use colored::*;
use num_format::{Locale, ToFormattedString};

use super::Strategy;
use crate::cmd::format_elapsed;

/// Sample inputs exercised by the timing harness.
const SAMPLE_CASES: [(&str, &str); 6] = [
    ("abc", "All unique characters, 3 characters"),
    ("abcd", "All unique characters, 4 characters"),
    ("aabb", "Some duplicate characters, 4 characters"),
    ("abcde", "All unique characters, 5 characters"),
    ("aabbc", "Some duplicate characters, 5 characters"),
    ("aaaa", "All duplicate characters, 4 characters"),
];

/// Timing of a single strategy run over one sample input.
pub struct BenchResult {
    pub description: &'static str,
    pub strategy: &'static str,
    pub permutations: usize,
    pub elapsed: Duration,
}

/// Runs all three permutation strategies over the fixed sample inputs,
/// printing a line per run and returning the collected timings.
///
/// The output is human-oriented; neither the line format nor the set of
/// sample inputs is a stable interface.
pub fn run_speed_test() -> Vec<BenchResult> {
    let mut results = Vec::new();

    for (input, description) in SAMPLE_CASES {
        println!("Testing with input: '{}' ({})", input.blue(), description);

        for strategy in [Strategy::Recursive, Strategy::Unique, Strategy::Iterative] {
            results.push(time_strategy(strategy, input, description));
        }
        println!();
    }

    results
}

fn time_strategy(strategy: Strategy, input: &'static str, description: &'static str) -> BenchResult {
    let start = Instant::now();
    let perms = strategy.run(input);
    let elapsed = start.elapsed();

    println!(
        " - {}: {} permutations in {}",
        strategy.name(),
        perms.len().to_formatted_string(&Locale::en),
        format_elapsed(elapsed)
    );

    BenchResult {
        description,
        strategy: strategy.name(),
        permutations: perms.len(),
        elapsed,
    }
}
