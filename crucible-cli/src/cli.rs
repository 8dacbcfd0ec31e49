//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; solve every input and part in order
    Sequential,
    /// Parallelize across inputs; parts run sequentially within each input (default)
    #[default]
    Input,
    /// Parallelize across all input/part combinations, sharing each parsed grid
    Part,
}

/// Minimum heat-loss routing for clumsy crucibles
#[derive(Parser, Debug)]
#[command(name = "crucible", about = "Route crucibles across a heat-loss grid", version)]
pub struct Args {
    /// Puzzle input files, one grid per file ("-" reads stdin)
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Check the built-in examples before solving the inputs
    #[arg(long)]
    pub verify: bool,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, input, or part
    #[arg(long, value_enum, default_value = "input")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["crucible", "input.txt"]).unwrap();
        assert_eq!(args.inputs, vec![PathBuf::from("input.txt")]);
        assert_eq!(args.part, None);
        assert_eq!(args.parallelize_by, ParallelizeBy::Input);
        assert!(!args.verify);
        assert!(!args.quiet);
    }

    #[test]
    fn test_part_range_enforced() {
        assert!(Args::try_parse_from(["crucible", "-p", "3", "input.txt"]).is_err());
        let args = Args::try_parse_from(["crucible", "-p", "2", "input.txt"]).unwrap();
        assert_eq!(args.part, Some(2));
    }

    #[test]
    fn test_input_required() {
        assert!(Args::try_parse_from(["crucible"]).is_err());
    }

    #[test]
    fn test_parallelize_by_part() {
        let args =
            Args::try_parse_from(["crucible", "--parallelize-by", "part", "a.txt", "b.txt"]).unwrap();
        assert_eq!(args.parallelize_by, ParallelizeBy::Part);
        assert_eq!(args.inputs.len(), 2);
    }
}
