//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use chrono::{TimeDelta, Utc};
use itertools::Itertools;
use puzzle_solver::{DynSolver, SolverRegistry};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, puzzle_solver::SolverError>,
    /// Parse timing, reported with the first part of each work item
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(
        registry: SolverRegistry,
        inputs: InputStore,
        config: &Config,
    ) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_config: SyncExecutorConfig {
                registry,
                inputs,
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// The input store backing this executor
    pub fn inputs(&self) -> &InputStore {
        &self.sync_config.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_config;
        let mut items: Vec<WorkItem> = cfg
            .registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect();

        items.sort_by_key(|w| (w.year, w.day));
        items
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.sync_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected: Option<ArcExecutorError> = None;
                for work in &work_items {
                    if let Err(e) = self.run_solver(work, &tx) {
                        collected = Some(ArcExecutorError::combine_opt(collected, e));
                    }
                }
                collected.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                // Group by year, parallelize across years
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_grouped(by_year, &tx)
            }
            ParallelizeBy::Day => self.execute_parallel(work_items, &tx),
            ParallelizeBy::Part => {
                // One work item per part so parts of the same day run concurrently
                let per_part: Vec<WorkItem> = work_items
                    .into_iter()
                    .flat_map(|w| {
                        let (year, day) = (w.year, w.day);
                        w.parts.map(move |p| WorkItem {
                            year,
                            day,
                            parts: p..=p,
                        })
                    })
                    .collect();

                self.execute_parallel(per_part, &tx)
            }
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let errors: Vec<ArcExecutorError> = self.thread_pool.install(|| {
            work_items
                .par_iter()
                .filter_map(|work| self.run_solver(work, tx).err())
                .collect()
        });

        fold_errors(errors)
    }

    /// Execute groups in parallel, items within a group sequentially
    fn execute_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let errors: Vec<ArcExecutorError> = self.thread_pool.install(|| {
            groups
                .par_iter()
                .flat_map_iter(|group| {
                    group
                        .iter()
                        .filter_map(|work| self.run_solver(work, tx).err())
                })
                .collect()
        });

        fold_errors(errors)
    }

    /// Run all parts of one work item, streaming results to the channel
    fn run_solver(
        &self,
        work: &WorkItem,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let cfg = &self.sync_config;
        let (year, day) = (work.year, work.day);

        let input = cfg
            .inputs
            .get(year, day)
            .map_err(|source| ExecutorError::Input { year, day, source })?;

        let mut solver = cfg
            .registry
            .create_solver(year, day, input)
            .map_err(ExecutorError::Solver)?;

        // Parse happens once per work item; attach its timing to the first part
        let mut parse_duration = Some(solver.parse_duration());

        for part in work.parts.clone() {
            let result = solve_part_internal(year, day, part, parse_duration.take(), &mut *solver);
            tx.send(result).map_err(|_| ExecutorError::ChannelSend)?;
        }

        Ok(())
    }
}

/// Solve a single part with timing
fn solve_part_internal(
    year: u16,
    day: u8,
    part: u8,
    parse_duration: Option<TimeDelta>,
    solver: &mut dyn DynSolver,
) -> SolverResult {
    let started = Utc::now();
    match solver.solve(part) {
        Ok(res) => SolverResult {
            year,
            day,
            part,
            solve_duration: res.duration(),
            answer: Ok(res.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            year,
            day,
            part,
            solve_duration: Utc::now() - started,
            answer: Err(e.into()),
            parse_duration,
        },
    }
}

/// Reduce collected errors to a single combined error, or Ok if none
fn fold_errors(errors: Vec<ArcExecutorError>) -> Result<(), ArcExecutorError> {
    let mut collected: Option<ArcExecutorError> = None;
    for e in errors {
        collected = Some(ArcExecutorError::combine_opt(collected, e));
    }
    collected.map_or(Ok(()), Err)
}
