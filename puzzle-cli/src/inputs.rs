//! Puzzle input resolution
//!
//! Inputs normally come from the copies embedded in `puzzle-solutions`; the
//! `--input` flag swaps in a file for a single year/day.

use crate::config::Config;
use crate::error::InputError;
use std::fs;

struct OverrideInput {
    year: u16,
    day: u8,
    text: String,
}

/// Resolves the input text for each (year, day) work item
pub struct InputStore {
    override_input: Option<OverrideInput>,
}

impl InputStore {
    /// Build the store, reading the override file up front if one was given
    pub fn from_config(config: &Config) -> Result<Self, InputError> {
        let override_input = match &config.input_override {
            Some((year, day, path)) => {
                let text = fs::read_to_string(path).map_err(|source| InputError::Io {
                    path: path.clone(),
                    source,
                })?;
                Some(OverrideInput {
                    year: *year,
                    day: *day,
                    text,
                })
            }
            None => None,
        };
        Ok(Self { override_input })
    }

    /// Get the input for a specific year/day
    pub fn get(&self, year: u16, day: u8) -> Result<&str, InputError> {
        if let Some(over) = &self.override_input
            && over.year == year
            && over.day == day
        {
            return Ok(&over.text);
        }

        puzzle_solutions::embedded_input(year, day).ok_or(InputError::Missing { year, day })
    }

    /// Check whether input is available for a year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get(year, day).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ParallelizeBy;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn config_with_override(path: Option<PathBuf>) -> Config {
        Config {
            year_filter: Some(2024),
            day_filter: Some(3),
            part_filter: None,
            tags: Vec::new(),
            input_override: path.map(|p| (2024, 3, p)),
            thread_count: 1,
            parallelize_by: ParallelizeBy::Sequential,
            quiet: true,
        }
    }

    #[test]
    fn embedded_input_is_served_by_default() {
        let store = InputStore::from_config(&config_with_override(None)).unwrap();
        assert!(store.contains(2024, 3));
        assert!(!store.contains(2024, 4));
        assert!(matches!(
            store.get(2024, 4),
            Err(InputError::Missing { year: 2024, day: 4 })
        ));
    }

    #[test]
    fn override_file_replaces_embedded_input() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "mul(2,3)").unwrap();

        let store =
            InputStore::from_config(&config_with_override(Some(file.path().to_path_buf())))
                .unwrap();
        assert_eq!(store.get(2024, 3).unwrap(), "mul(2,3)");
    }

    #[test]
    fn unreadable_override_file_is_an_error() {
        let result = InputStore::from_config(&config_with_override(Some(PathBuf::from(
            "/definitely/not/a/real/path.txt",
        ))));
        assert!(matches!(result, Err(InputError::Io { .. })));
    }
}
