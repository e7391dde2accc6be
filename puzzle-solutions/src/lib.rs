//! Daily puzzle solutions with automatic registration
//!
//! This crate contains the actual puzzle solutions organized by year. Each
//! solution uses the `AutoRegisterSolver` derive macro for automatic plugin
//! registration with the solver framework, and embeds its own puzzle input
//! so the runner works offline.

mod inputs;
pub mod year_2024;

pub use inputs::embedded_input;
