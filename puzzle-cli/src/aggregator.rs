//! Result aggregator for ordering parallel solver results
//!
//! Solvers finish in whatever order the thread pool schedules them, but
//! output should stream in (year, day, part) order. Two min-heaps make that
//! work: one holds the keys still expected, the other buffers results that
//! arrived ahead of their turn.

use crate::executor::SolverResult;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Key for ordering results, ascending by (year, day, part)
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Min-heap wrapper ordering SolverResult by its key
struct OrderedResult(SolverResult);

impl OrderedResult {
    fn key(&self) -> ResultKey {
        ResultKey::from(&self.0)
    }
}

impl Ord for OrderedResult {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse ordering for min-heap (smallest first)
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for OrderedResult {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedResult {}

impl PartialEq for OrderedResult {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

/// Aggregator that buffers results and emits them in sorted order
pub struct ResultAggregator {
    /// Min-heap of expected keys (next to output is at the top)
    expected: BinaryHeap<Reverse<ResultKey>>,
    /// Min-heap of received results waiting for their turn
    pending: BinaryHeap<OrderedResult>,
}

impl ResultAggregator {
    /// Create aggregator from the list of expected keys
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Add a result and return any results now ready for output, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.push(OrderedResult(result));
        self.pop_ready()
    }

    /// Emit buffered results while the smallest pending one is the next expected
    fn pop_ready(&mut self) -> Vec<SolverResult> {
        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(top_pending)) =
            (self.expected.peek(), self.pending.peek())
        {
            if top_pending.key() != *next_expected {
                break;
            }
            self.expected.pop();
            if let Some(OrderedResult(result)) = self.pending.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Drain any remaining buffered results regardless of expectations
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut rest: Vec<OrderedResult> = std::mem::take(&mut self.pending).into_vec();
        rest.sort_by_key(|r| r.key());
        rest.into_iter().map(|r| r.0).collect()
    }

    /// Whether every expected result has been emitted
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty() && self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn result(year: u16, day: u8, part: u8) -> SolverResult {
        SolverResult {
            year,
            day,
            part,
            answer: Ok(format!("{year}-{day}-{part}")),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    fn keys(results: &[SolverResult]) -> Vec<ResultKey> {
        results.iter().map(ResultKey::from).collect()
    }

    #[test]
    fn in_order_arrivals_pass_straight_through() {
        let expected = vec![
            ResultKey { year: 2024, day: 3, part: 1 },
            ResultKey { year: 2024, day: 3, part: 2 },
        ];
        let mut agg = ResultAggregator::new(expected.clone());

        assert_eq!(keys(&agg.add(result(2024, 3, 1))), vec![expected[0]]);
        assert_eq!(keys(&agg.add(result(2024, 3, 2))), vec![expected[1]]);
        assert!(agg.is_complete());
    }

    #[test]
    fn out_of_order_arrivals_are_buffered() {
        let expected = vec![
            ResultKey { year: 2024, day: 3, part: 1 },
            ResultKey { year: 2024, day: 3, part: 2 },
            ResultKey { year: 2024, day: 4, part: 1 },
        ];
        let mut agg = ResultAggregator::new(expected.clone());

        // Later results arrive first: nothing emitted yet
        assert!(agg.add(result(2024, 4, 1)).is_empty());
        assert!(agg.add(result(2024, 3, 2)).is_empty());

        // The head arrives and everything flushes in order
        assert_eq!(keys(&agg.add(result(2024, 3, 1))), expected);
        assert!(agg.is_complete());
    }

    #[test]
    fn drain_returns_leftovers_sorted() {
        let mut agg = ResultAggregator::new(vec![ResultKey { year: 2024, day: 3, part: 1 }]);

        agg.add(result(2024, 5, 2));
        agg.add(result(2024, 5, 1));

        let leftovers = agg.drain();
        assert_eq!(
            keys(&leftovers),
            vec![
                ResultKey { year: 2024, day: 5, part: 1 },
                ResultKey { year: 2024, day: 5, part: 2 },
            ]
        );
        assert!(!agg.is_complete());
    }
}
