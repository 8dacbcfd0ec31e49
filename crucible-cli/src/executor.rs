//! Parallel executor for running the solver over inputs

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use chrono::TimeDelta;
use crucible_core::{ClumsyCrucible, DynSolver, ParseError, Solver, SolverError, SolverInstance};
use itertools::{Either, Itertools};
use log::{debug, info};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single part
pub struct SolverResult {
    /// Position of the input on the command line
    pub input: usize,
    /// Display name of the input
    pub label: String,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    pub solve_duration: TimeDelta,
    /// Set on the first reported part of each input only
    pub parse_duration: Option<TimeDelta>,
}

/// One input read from the command line
pub struct WorkItem {
    pub index: usize,
    pub label: String,
    pub input: String,
}

type Parsed<'a> = SolverInstance<'a, ClumsyCrucible>;

/// Parallel executor for running solvers
pub struct Executor {
    work_items: Vec<WorkItem>,
    /// Parts solved for every input
    parts: RangeInclusive<u8>,
    parallelize_by: ParallelizeBy,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(work_items: Vec<WorkItem>, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        // `--part` is range-checked by clap
        let parts = match config.part_filter {
            Some(part) => part..=part,
            None => 1..=ClumsyCrucible::PARTS,
        };

        Ok(Self {
            work_items,
            parts,
            parallelize_by: config.parallelize_by,
            thread_pool,
        })
    }

    pub fn input_count(&self) -> usize {
        self.work_items.len()
    }

    pub fn parts(&self) -> RangeInclusive<u8> {
        self.parts.clone()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        info!(
            "solving {} input(s), parallelize by {:?}",
            self.work_items.len(),
            self.parallelize_by
        );

        match self.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in &self.work_items {
                    if let Err(e) = run_work_item(work, self.parts(), &tx) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Input => self.thread_pool.install(|| {
                self.work_items
                    .par_iter()
                    .map(|work| run_work_item(work, self.parts(), &tx).err())
                    .reduce(|| None, merge_errors)
                    .map_or(Ok(()), Err)
            }),
            ParallelizeBy::Part => self.thread_pool.install(|| self.execute_parts_parallel(&tx)),
        }
    }

    /// Parse every input once, then solve all (input, part) pairs in parallel
    fn execute_parts_parallel(&self, tx: &Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let parsed: Vec<(&WorkItem, Result<Parsed<'_>, ParseError>)> = self
            .work_items
            .par_iter()
            .map(|work| (work, Parsed::new(&work.input)))
            .collect();

        let (ready, failed): (Vec<_>, Vec<_>) =
            parsed
                .into_iter()
                .partition_map(|(work, parsed)| match parsed {
                    Ok(solver) => Either::Left((work, solver)),
                    Err(e) => Either::Right((work, e)),
                });

        let parse_errors = failed
            .iter()
            .map(|(work, e)| send_parse_failure(work, e, self.parts(), tx).err())
            .fold(None, merge_errors);

        let jobs: Vec<(&WorkItem, &Parsed<'_>, u8)> = ready
            .iter()
            .flat_map(|(work, solver)| self.parts().map(move |part| (*work, solver, part)))
            .collect();

        let solve_errors = jobs
            .into_par_iter()
            .map(|(work, solver, part)| {
                let first = part == *self.parts.start();
                send(tx, solve_part_internal(work, part, first, solver)).err()
            })
            .reduce(|| None, merge_errors);

        merge_errors(parse_errors, solve_errors).map_or(Ok(()), Err)
    }
}

fn merge_errors(
    a: Option<ArcExecutorError>,
    b: Option<ArcExecutorError>,
) -> Option<ArcExecutorError> {
    match (a, b) {
        (Some(a), Some(b)) => Some(ArcExecutorError::combine(a, b)),
        (a, b) => a.or(b),
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Parse one input and solve its parts in order
fn run_work_item(
    work: &WorkItem,
    parts: RangeInclusive<u8>,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    let solver = match Parsed::new(&work.input) {
        Ok(solver) => solver,
        Err(e) => return send_parse_failure(work, &e, parts, tx),
    };
    let first = *parts.start();
    for part in parts {
        send(tx, solve_part_internal(work, part, part == first, &solver))?;
    }
    Ok(())
}

/// Report a parse failure once per requested part
fn send_parse_failure(
    work: &WorkItem,
    error: &ParseError,
    parts: RangeInclusive<u8>,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    debug!("{}: parse failed: {}", work.label, error);
    for part in parts {
        send(
            tx,
            SolverResult {
                input: work.index,
                label: work.label.clone(),
                part,
                answer: Err(SolverError::ParseError(error.clone())),
                solve_duration: TimeDelta::zero(),
                parse_duration: None,
            },
        )?;
    }
    Ok(())
}

/// Solve a single part; the first part of an input carries its parse time
fn solve_part_internal(
    work: &WorkItem,
    part: u8,
    first: bool,
    solver: &dyn DynSolver,
) -> SolverResult {
    let outcome = solver.solve(part);
    debug!("{} part {}: done in {}", work.label, part, outcome.elapsed);

    SolverResult {
        input: work.index,
        label: work.label.clone(),
        part,
        answer: outcome.answer.map_err(SolverError::from),
        solve_duration: outcome.elapsed,
        parse_duration: first.then(|| solver.parse_time()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crucible_core::samples::EXAMPLE;
    use std::sync::mpsc;

    fn config(parallelize_by: ParallelizeBy, part_filter: Option<u8>) -> Config {
        Config {
            sources: Vec::new(),
            part_filter,
            thread_count: 2,
            parallelize_by,
            verify: false,
            quiet: true,
        }
    }

    fn run(parallelize_by: ParallelizeBy, items: Vec<WorkItem>) -> Vec<SolverResult> {
        let executor = Executor::new(items, &config(parallelize_by, None)).unwrap();
        let (tx, rx) = mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<_> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.input, r.part));
        results
    }

    fn item(index: usize, label: &str, input: &str) -> WorkItem {
        WorkItem {
            index,
            label: label.to_string(),
            input: input.to_string(),
        }
    }

    fn items() -> Vec<WorkItem> {
        vec![item(0, "example", EXAMPLE.input), item(1, "bad", "12\n3")]
    }

    #[test]
    fn test_every_mode_gives_same_answers() {
        for mode in [
            ParallelizeBy::Sequential,
            ParallelizeBy::Input,
            ParallelizeBy::Part,
        ] {
            let results = run(mode, items());
            assert_eq!(results.len(), 4, "{:?}", mode);
            assert_eq!(results[0].answer.as_deref().ok(), Some("102"));
            assert_eq!(results[1].answer.as_deref().ok(), Some("94"));
            assert!(matches!(results[2].answer, Err(SolverError::ParseError(_))));
            assert!(matches!(results[3].answer, Err(SolverError::ParseError(_))));
        }
    }

    #[test]
    fn test_parse_time_reported_once_per_input() {
        let results = run(ParallelizeBy::Part, items());
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_part_filter_selects_parts() {
        let all = Executor::new(items(), &config(ParallelizeBy::Input, None)).unwrap();
        assert_eq!(all.parts(), 1..=2);
        assert_eq!(all.input_count(), 2);

        let executor = Executor::new(items(), &config(ParallelizeBy::Input, Some(2))).unwrap();
        assert_eq!(executor.parts(), 2..=2);
        let (tx, rx) = mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<_> = rx.into_iter().collect();
        results.sort_by_key(|r| r.input);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].answer.as_deref().ok(), Some("94"));
        assert!(results[0].parse_duration.is_some());
    }
}
