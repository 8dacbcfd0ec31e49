//! Error types for the CLI

use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input source could not be read
    #[error("Failed to read input {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] crucible_core::SolverError),

    /// A built-in example produced the wrong answer
    #[error("Sample '{sample}' part {part}: expected {expected}, got {actual}")]
    SampleMismatch {
        sample: &'static str,
        part: u8,
        expected: String,
        actual: String,
    },

    /// Some parts failed; their errors were already reported
    #[error("{0} part(s) failed")]
    Failed(usize),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// The executor thread panicked
    #[error("Executor thread panicked")]
    Panicked,

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two Arc-wrapped errors into one
    /// 1. If first is singular and second is Multiple: prepend first to second's vec
    /// 2. If second is singular and first is Multiple: append second to first's vec
    /// 3. If both are Multiple: concat them
    /// 4. If both are singular: create new Multiple with both
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(err: &ArcExecutorError) -> usize {
        match err.inner() {
            ExecutorError::Multiple(v) => v.len(),
            _ => 1,
        }
    }

    #[test]
    fn test_combine_singles() {
        let combined = ArcExecutorError::combine(
            ExecutorError::ChannelSend.into(),
            ExecutorError::Panicked.into(),
        );
        assert_eq!(count(&combined), 2);
        assert_eq!(combined.to_string(), "Multiple errors occurred (2 total)");
    }

    #[test]
    fn test_combine_flattens_multiple() {
        let pair = ArcExecutorError::combine(
            ExecutorError::ChannelSend.into(),
            ExecutorError::ChannelSend.into(),
        );
        let triple = ArcExecutorError::combine(pair.clone(), ExecutorError::Panicked.into());
        assert_eq!(count(&triple), 3);
        let four = ArcExecutorError::combine(pair.clone(), pair);
        assert_eq!(count(&four), 4);
    }

    #[test]
    fn test_combine_opt_none_keeps_new() {
        let err = ArcExecutorError::combine_opt(None, ExecutorError::ChannelSend.into());
        assert!(matches!(err.inner(), ExecutorError::ChannelSend));
    }
}
