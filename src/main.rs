use std::io::{self, BufRead};
use std::path::Path;

use clap::Parser;
use colored::*;

use seekrs::cmd::progress_bar::create_spinner;
use seekrs::cmd::{build_bench_summary_table, Cli, Commands};
use seekrs::fsutil::find_file;
use seekrs::perm::bench::run_speed_test;
use seekrs::perm::permute;
use seekrs::util::errors::AppError;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            directory,
            filename,
            ignore_case,
        } => {
            println!(
                "Searching for '{}' in directory '{}'...",
                filename.blue(),
                directory.blue()
            );

            let spinner = create_spinner("Searching");

            let results = match find_file(Path::new(&directory), &filename, !ignore_case) {
                Ok(results) => results,
                Err(e) => {
                    spinner.finish_and_clear();
                    eprintln!("{}: {}", "Search failed".red(), e);
                    std::process::exit(1);
                }
            };
            spinner.finish_and_clear();

            if results.is_empty() {
                println!("{}", "File not found.".yellow());
            } else {
                println!("{}", "File found at the following locations:".green());
                for path in results {
                    println!("{}", path.display());
                }
            }
        }
        Commands::Permute { input } => {
            let input = input.map_or_else(read_input_line, Ok).unwrap_or_else(|e| {
                eprintln!("{}: {}", "Failed to read input".red(), e);
                std::process::exit(1);
            });

            let input = input.trim();
            if input.is_empty() {
                eprintln!("{}: {}", "Invalid input".red(), AppError::EmptyInput);
                std::process::exit(1);
            }

            println!("Permutations of '{}':", input.blue());
            for perm in permute(input) {
                println!("{perm}");
            }
        }
        Commands::Bench => {
            let results = run_speed_test();
            println!("{}", build_bench_summary_table(&results));
        }
    }
}

/// Reads the string to permute from stdin when it was not given as an argument.
fn read_input_line() -> Result<String, AppError> {
    println!("Enter a string to generate its permutations:");

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
