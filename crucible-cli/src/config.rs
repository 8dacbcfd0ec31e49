//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where a puzzle input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Read the whole input
    pub fn read(&self) -> Result<String, CliError> {
        let result = match self {
            Self::Stdin => io::read_to_string(io::stdin()),
            Self::File(path) => fs::read_to_string(path),
        };
        result.map_err(|source| CliError::Input {
            path: self.to_string(),
            source,
        })
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolved runtime configuration
pub struct Config {
    /// Inputs to solve, in output order
    pub sources: Vec<InputSource>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Whether to check the built-in samples first
    pub verify: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let sources: Vec<InputSource> = args
            .inputs
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    InputSource::Stdin
                } else {
                    InputSource::File(expand_tilde(path))
                }
            })
            .collect();

        if sources.iter().filter(|s| **s == InputSource::Stdin).count() > 1 {
            return Err(CliError::Config(
                "stdin (\"-\") can only be given once".to_string(),
            ));
        }

        let thread_count = match args.threads {
            Some(0) => {
                return Err(CliError::Config(
                    "thread count must be at least 1".to_string(),
                ));
            }
            Some(n) => n,
            None => num_cpus(),
        };

        Ok(Config {
            sources,
            part_filter: args.part,
            thread_count,
            parallelize_by: args.parallelize_by,
            verify: args.verify,
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
