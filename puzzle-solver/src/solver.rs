//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing raw puzzle input into shared data.
///
/// Defines the shared data type and the parsing step for a solver, keeping
/// parsing and solving concerns separate.
///
/// `SharedData` is a GAT so a solver can pick its ownership strategy:
/// - `Vec<T>` or a custom struct for owned data
/// - `&'a str` for zero-copy borrowed data when no transformation is needed
///
/// # Example
///
/// ```
/// use puzzle_solver::{AocParser, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// Parsed input shared by all parts of the puzzle.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving one part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, ...), giving each part
/// a statically checked impl.
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle, returning the answer as a string.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait that every registered solver must implement.
///
/// Usually generated with `#[derive(AocSolver)]`, which dispatches
/// `solve_part` to the `PartSolver<N>` impls declared by
/// `#[aoc_solver(max_parts = N)]`.
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem.
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked dispatch on top of [`Solver`].
pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
