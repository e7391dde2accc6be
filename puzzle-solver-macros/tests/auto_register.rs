//! Integration tests for the derive macros against the real solver crate

use puzzle_solver::{
    AocParser, ParseError, PartSolver, RegistryBuilder, SolveError, Solver,
};
use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 25, tags = ["test", "macro"])]
struct MacroSolver;

impl AocParser for MacroSolver {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for MacroSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for MacroSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

#[test]
fn derive_generates_solver_impl() {
    let mut shared = <MacroSolver as AocParser>::parse("hello").unwrap();

    assert_eq!(<MacroSolver as Solver>::PARTS, 2);
    assert_eq!(MacroSolver::solve_part(&mut shared, 1).unwrap(), "5");
    assert_eq!(MacroSolver::solve_part(&mut shared, 2).unwrap(), "olleh");
    assert!(matches!(
        MacroSolver::solve_part(&mut shared, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
}

#[test]
fn derived_plugin_is_collected() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert!(registry.contains(2015, 25));
    let mut solver = registry.create_solver(2015, 25, "abc").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
}

#[test]
fn plugin_filter_by_tag() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"no-such-tag"))
        .unwrap()
        .build();

    assert!(!registry.contains(2015, 25));
}
