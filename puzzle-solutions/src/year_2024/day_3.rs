//! Day 3: scan corrupted memory for `mul(X,Y)` instructions.
//!
//! The input is a jumble of characters hiding multiply instructions of the
//! exact shape `mul(A,B)` with 1-3 digit operands. Part 1 sums the products
//! of every valid instruction. Part 2 additionally honors `do()` / `don't()`
//! toggles: only instructions seen while the scan is enabled count, and the
//! scan starts enabled.

use anyhow::anyhow;
use puzzle_solver::{AocParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::{Captures, Regex};
use std::sync::LazyLock;

const MUL_PATTERN: &str = r"mul\((\d{1,3}),(\d{1,3})\)";
const TOKEN_PATTERN: &str = r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)";

static MUL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(MUL_PATTERN).unwrap());
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(TOKEN_PATTERN).unwrap());

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["scanner", "regex"])]
pub struct Solver;

/// A multiply instruction extracted from the corrupted memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mul {
    /// The left operand (0-999 by grammar)
    pub x: u32,
    /// The right operand (0-999 by grammar)
    pub y: u32,
    /// Byte offset of the instruction in the source text
    pub start: usize,
}

impl Mul {
    /// Perform the multiplication
    pub fn product(&self) -> u64 {
        u64::from(self.x) * u64::from(self.y)
    }
}

/// One recognized token in the memory stream, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A `mul(A,B)` instruction
    Mul(Mul),
    /// A `do()` toggle: enables subsequent instructions
    Enable,
    /// A `don't()` toggle: disables subsequent instructions
    Disable,
}

/// Scan the input for every valid `mul(A,B)` instruction, in source order.
///
/// Candidates that deviate from the exact grammar (wrong brackets, spaces,
/// missing comma, operands over 3 digits) are skipped silently. An input
/// with zero valid instructions is an error.
pub fn scan_muls(input: &str) -> Result<Vec<Mul>, ParseError> {
    let muls = MUL_RE
        .captures_iter(input)
        .map(|caps| mul_from_captures(&caps))
        .collect::<anyhow::Result<Vec<Mul>>>()
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    if muls.is_empty() {
        return Err(ParseError::MissingData(
            "no mul instructions found".to_string(),
        ));
    }

    Ok(muls)
}

/// Scan the input for `mul(A,B)`, `do()` and `don't()` tokens, in source order.
///
/// Anything that is not one of the three exact token shapes is ignored
/// (`undo()` is not a toggle). An input with zero tokens of any kind is an
/// error.
pub fn scan_tokens(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();

    for caps in TOKEN_RE.captures_iter(input) {
        // Group 0 always participates in a match.
        let Some(whole) = caps.get(0) else { continue };
        let token = match whole.as_str() {
            "do()" => Token::Enable,
            "don't()" => Token::Disable,
            _ => Token::Mul(
                mul_from_captures(&caps).map_err(|e| ParseError::InvalidFormat(e.to_string()))?,
            ),
        };
        tokens.push(token);
    }

    if tokens.is_empty() {
        return Err(ParseError::MissingData(
            "no mul, do or don't instructions found".to_string(),
        ));
    }

    Ok(tokens)
}

/// Fold the token stream through the two-state enable automaton.
///
/// The scan starts enabled; `do()` enables and `don't()` disables every
/// subsequent instruction. Returns the instructions seen while enabled.
pub fn enabled_muls(tokens: &[Token]) -> Vec<Mul> {
    let mut enabled = true;
    let mut muls = Vec::new();

    for token in tokens {
        match token {
            Token::Enable => enabled = true,
            Token::Disable => enabled = false,
            Token::Mul(mul) if enabled => muls.push(*mul),
            Token::Mul(_) => {}
        }
    }

    muls
}

/// Convert a `mul` regex match into an instruction.
///
/// The grammar guarantees 1-3 digit operands, so the numeric conversions are
/// defensive only.
fn mul_from_captures(caps: &Captures<'_>) -> anyhow::Result<Mul> {
    let whole = caps
        .get(0)
        .ok_or_else(|| anyhow!("mul match has no span"))?;
    let x = caps
        .get(1)
        .ok_or_else(|| anyhow!("mul instruction missing left operand"))?
        .as_str()
        .parse()
        .map_err(|e| anyhow!("bad left operand: {e}"))?;
    let y = caps
        .get(2)
        .ok_or_else(|| anyhow!("mul instruction missing right operand"))?
        .as_str()
        .parse()
        .map_err(|e| anyhow!("bad right operand: {e}"))?;

    Ok(Mul {
        x,
        y,
        start: whole.start(),
    })
}

impl AocParser for Solver {
    // Both parts run their own regex pass over the raw text, so parsing is
    // zero-copy.
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let muls = scan_muls(shared).map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
        let sum: u64 = muls.iter().map(Mul::product).sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let tokens = scan_tokens(shared).map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
        let sum: u64 = enabled_muls(&tokens).iter().map(Mul::product).sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_INPUT: &str = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
    const TEST_INPUT_WITH_DOS_AND_DONTS: &str =
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    #[test]
    fn scan_muls_finds_valid_instructions() {
        let got = scan_muls(TEST_INPUT).unwrap();

        let want = vec![
            Mul { x: 2, y: 4, start: 1 },
            Mul { x: 5, y: 5, start: 29 },
            Mul { x: 11, y: 8, start: 53 },
            Mul { x: 8, y: 5, start: 62 },
        ];

        assert_eq!(got, want);
    }

    #[test]
    fn part1_example_sums_to_161() {
        let muls = scan_muls(TEST_INPUT).unwrap();
        let sum: u64 = muls.iter().map(Mul::product).sum();
        assert_eq!(sum, 161);
    }

    #[test]
    fn part2_example_sums_to_48() {
        let tokens = scan_tokens(TEST_INPUT_WITH_DOS_AND_DONTS).unwrap();
        let sum: u64 = enabled_muls(&tokens).iter().map(Mul::product).sum();
        assert_eq!(sum, 48);
    }

    #[test]
    fn part2_example_keeps_only_enabled_pairs() {
        // Disabled after don't(); the do() hiding inside undo() re-enables
        // the final instruction.
        let tokens = scan_tokens(TEST_INPUT_WITH_DOS_AND_DONTS).unwrap();
        let pairs: Vec<(u32, u32)> = enabled_muls(&tokens)
            .iter()
            .map(|m| (m.x, m.y))
            .collect();
        assert_eq!(pairs, vec![(2, 4), (8, 5)]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(scan_muls(""), Err(ParseError::MissingData(_))));
        assert!(matches!(scan_tokens(""), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn input_without_tokens_is_an_error() {
        let input = "random words here but nothing we want";
        assert!(matches!(scan_muls(input), Err(ParseError::MissingData(_))));
        assert!(matches!(
            scan_tokens(input),
            Err(ParseError::MissingData(_))
        ));
    }

    #[test]
    fn malformed_candidates_are_skipped() {
        // Each malformed shape next to one valid instruction: only the valid
        // one survives, none of the malformed ones error.
        for malformed in ["mul[5,3)", "mul(5,3]", "mul(53)", "mul( 5 3 )"] {
            let input = format!("{malformed}mul(3,2)");
            let got = scan_muls(&input).unwrap();
            assert_eq!(got.len(), 1, "input {input:?}");
            assert_eq!((got[0].x, got[0].y), (3, 2), "input {input:?}");
        }
    }

    #[test]
    fn operands_parse_exactly() {
        let got = scan_muls("mul(555,333)").unwrap();
        assert_eq!(got, vec![Mul { x: 555, y: 333, start: 0 }]);
    }

    #[test]
    fn four_digit_operands_are_invalid() {
        assert!(scan_muls("mul(1234,5)").is_err());
        assert!(scan_muls("mul(12,3456)").is_err());
    }

    #[test]
    fn toggles_only_is_valid_token_stream_but_has_no_muls() {
        let tokens = scan_tokens("do()don't()do()").unwrap();
        assert_eq!(tokens, vec![Token::Enable, Token::Disable, Token::Enable]);
        assert!(enabled_muls(&tokens).is_empty());
    }

    #[test]
    fn scan_is_idempotent() {
        let first = scan_tokens(TEST_INPUT_WITH_DOS_AND_DONTS).unwrap();
        let second = scan_tokens(TEST_INPUT_WITH_DOS_AND_DONTS).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn solver_parts_match_examples() {
        let mut shared = <Solver as AocParser>::parse(TEST_INPUT).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "161");

        let mut shared = <Solver as AocParser>::parse(TEST_INPUT_WITH_DOS_AND_DONTS).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "48");
    }

    #[test]
    fn embedded_input_solves() {
        let input = crate::embedded_input(2024, 3).unwrap();
        let all: u64 = scan_muls(input).unwrap().iter().map(Mul::product).sum();
        let tokens = scan_tokens(input).unwrap();
        let enabled: u64 = enabled_muls(&tokens).iter().map(Mul::product).sum();

        // The enabled set is a subset of all instructions.
        assert!(enabled <= all);
        assert!(all > 0);
    }
}
