//! Crucible CLI - run the clumsy crucible solver over puzzle inputs

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod output;
mod verify;

use clap::Parser;
use cli::Args;
use config::Config;
use crucible_core::samples::SAMPLES;
use executor::{Executor, SolverResult, WorkItem};
use log::info;
use output::{OutputMode, Summary};
use std::io::Write;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;

    if config.verify {
        verify::verify_samples(SAMPLES)?;
        info!("all {} sample(s) verified", SAMPLES.len());
        if !config.quiet {
            println!("Samples verified.");
        }
    }

    let work_items = read_work_items(&config)?;
    let executor = Executor::new(work_items, &config).map_err(error::ArcExecutorError::from)?;

    run_executor(executor, config.quiet)
}

/// Read every input up front so unreadable files fail before any solving
fn read_work_items(config: &Config) -> Result<Vec<WorkItem>, error::CliError> {
    config
        .sources
        .iter()
        .enumerate()
        .map(|(index, source)| -> Result<WorkItem, error::CliError> {
            Ok(WorkItem {
                index,
                label: source.to_string(),
                input: source.read()?,
            })
        })
        .collect()
}

/// Run the executor and collect results
fn run_executor(executor: Executor, quiet: bool) -> Result<(), error::CliError> {
    let mut aggregator =
        aggregator::ResultAggregator::new(executor.input_count(), executor.parts());
    if !quiet {
        println!(
            "Running {} part(s)...",
            executor.input_count() * executor.parts().count()
        );
    }

    // Set up result channel
    let (tx, rx) = std::sync::mpsc::channel();

    // Run executor in background thread
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let mode = OutputMode::new(quiet);
    let mut summary = Summary::default();
    let mut emit = |result: SolverResult| {
        mode.print_result(&result);
        summary.record(&result);
    };

    for result in rx {
        aggregator.add(result).into_iter().for_each(&mut emit);
    }
    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected results were received");
        aggregator.drain().into_iter().for_each(&mut emit);
    }

    executor_handle
        .join()
        .map_err(|_| error::ArcExecutorError::from(error::ExecutorError::Panicked))??;

    mode.print_summary(&summary);

    match summary.failed() {
        0 => Ok(()),
        failures => Err(error::CliError::Failed(failures)),
    }
}
