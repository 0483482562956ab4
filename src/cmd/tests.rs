use std::time::Duration;

use crate::cmd::progress_bar::create_spinner;
use crate::cmd::{build_bench_summary_table, format_elapsed};
use crate::perm::bench::BenchResult;

#[test]
fn test_create_spinner_basic() {
    let message = "Searching";
    let pb = create_spinner(message);
    assert_eq!(pb.message(), message);

    // The spinner should tick without panicking
    pb.tick();
    pb.finish_and_clear();
}

#[test]
fn test_format_elapsed() {
    assert_eq!(format_elapsed(Duration::ZERO), "0.000000s");
    assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.500000s");
    assert_eq!(format_elapsed(Duration::from_micros(250)), "0.000250s");
}

#[test]
fn test_build_bench_summary_table() {
    let results = vec![
        BenchResult {
            description: "All unique characters, 3 characters",
            strategy: "recursive",
            permutations: 6,
            elapsed: Duration::from_micros(42),
        },
        BenchResult {
            description: "Some duplicate characters, 4 characters",
            strategy: "unique recursive",
            permutations: 1234,
            elapsed: Duration::from_millis(2),
        },
    ];

    let output = build_bench_summary_table(&results);

    assert!(output.contains("Description"));
    assert!(output.contains("Strategy"));
    assert!(output.contains("Permutations"));
    assert!(output.contains("recursive"));
    assert!(output.contains("1,234"));
    assert!(output.contains("0.002000s"));
}

#[test]
fn test_build_bench_summary_table_empty() {
    let output = build_bench_summary_table(&[]);
    assert!(output.contains("Permutations"));
}
