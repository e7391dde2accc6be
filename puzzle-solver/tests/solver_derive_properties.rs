//! Property-based tests for the AocSolver derive macro
//!
//! Verifies that the generated `Solver::solve_part` dispatch agrees with the
//! `PartSolver<N>` impls it forwards to, and that part numbers outside the
//! declared range are rejected.

use proptest::prelude::*;
use puzzle_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestSolver;

impl AocParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat("bad int".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any valid part number N, `Solver::solve_part(shared, N)` produces
    /// the same result as calling `PartSolver<N>::solve(shared)` directly.
    #[test]
    fn solve_part_dispatches_to_correct_part_solver(
        numbers in prop::collection::vec(1i32..10, 1..5),
        part in 1u8..=2
    ) {
        let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let mut shared1 = <TestSolver as AocParser>::parse(&input).unwrap();
        let mut shared2 = <TestSolver as AocParser>::parse(&input).unwrap();

        let solver_result = <TestSolver as Solver>::solve_part(&mut shared1, part);

        let direct_result = match part {
            1 => <TestSolver as PartSolver<1>>::solve(&mut shared2),
            2 => <TestSolver as PartSolver<2>>::solve(&mut shared2),
            _ => unreachable!(),
        };

        prop_assert_eq!(solver_result.unwrap(), direct_result.unwrap());
    }

    /// Part numbers outside 1..=max_parts come back as PartNotImplemented.
    #[test]
    fn invalid_part_returns_not_implemented(invalid_part in prop_oneof![Just(0u8), 3u8..=255]) {
        let input = "1\n2\n3";
        let mut shared = <TestSolver as AocParser>::parse(input).unwrap();

        let result = <TestSolver as Solver>::solve_part(&mut shared, invalid_part);

        match result {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, invalid_part),
            _ => prop_assert!(false, "Expected PartNotImplemented error for part {}", invalid_part),
        }
    }
}

#[test]
fn parts_constant_matches_max_parts() {
    assert_eq!(<TestSolver as Solver>::PARTS, 2);
}
