//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::path::PathBuf;

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Input override: replace the embedded input for one year/day with a file
    pub input_override: Option<(u16, u8, PathBuf)>,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let thread_count = args.threads.unwrap_or_else(num_cpus);

        // An input override only makes sense for a single, named puzzle.
        let input_override = match args.input {
            Some(path) => match (args.year, args.day) {
                (Some(year), Some(day)) => Some((year, day, path)),
                _ => {
                    return Err(CliError::Config(
                        "--input requires both --year and --day".to_string(),
                    ));
                }
            },
            None => None,
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_override,
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        })
    }
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            year: None,
            day: None,
            part: None,
            tags: Vec::new(),
            input: None,
            threads: None,
            parallelize_by: ParallelizeBy::Day,
            quiet: false,
        }
    }

    #[test]
    fn input_override_requires_year_and_day() {
        let args = Args {
            input: Some(PathBuf::from("input.txt")),
            year: Some(2024),
            ..base_args()
        };
        assert!(matches!(
            Config::from_args(args),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn input_override_resolves_with_filters() {
        let args = Args {
            input: Some(PathBuf::from("input.txt")),
            year: Some(2024),
            day: Some(3),
            ..base_args()
        };
        let config = Config::from_args(args).unwrap();
        assert_eq!(
            config.input_override,
            Some((2024, 3, PathBuf::from("input.txt")))
        );
    }

    #[test]
    fn thread_count_defaults_to_parallelism() {
        let config = Config::from_args(base_args()).unwrap();
        assert!(config.thread_count >= 1);
    }
}
