//! Puzzle Solver Library
//!
//! A flexible and type-safe framework for daily puzzle solvers (Advent of
//! Code style). Each problem is implemented as a solver with its own input
//! parsing and one or more parts.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`AocParser`],
//!   [`PartSolver`], [`Solver`])
//! - Timed, type-erased solver instances ([`SolverInstance`], [`DynSolver`])
//! - A registry for looking up solvers by year and day ([`SolverRegistry`])
//! - Automatic registration via the `inventory` plugin system and the
//!   [`AutoRegisterSolver`] derive
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{AocParser, ParseError, PartSolver, RegistryBuilder, SolveError};
//! use puzzle_solver::{AocSolver, RegisterableSolver};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 1)]
//! struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! let registry = MyDay1
//!     .register_with(RegistryBuilder::new(), 2024, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2024, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Trait stack
//!
//! - [`AocParser`] turns raw input into `SharedData`, a GAT that may borrow
//!   from the input for zero-copy parsing.
//! - [`PartSolver<N>`] solves one part against the shared data.
//! - [`Solver`] dispatches a runtime part number to the right `PartSolver`;
//!   the [`AocSolver`] derive generates it from `#[aoc_solver(max_parts = N)]`.
//!
//! ## Plugin system
//!
//! `#[derive(AutoRegisterSolver)]` with `#[aoc(year = ..., day = ..., tags = [...])]`
//! submits a [`SolverPlugin`] that `RegistryBuilder::register_all_plugins`
//! (or `register_solver_plugins` with a filter) picks up at startup.

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};
