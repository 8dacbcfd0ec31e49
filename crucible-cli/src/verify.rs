//! Check the solver against worked examples before trusting it on real input

use crate::error::CliError;
use crucible_core::samples::Sample;
use crucible_core::{ClumsyCrucible, DynSolver, SolverError, SolverInstance};
use log::info;

/// Solve every sample part and compare with its expected answer
pub fn verify_samples(samples: &[Sample]) -> Result<(), CliError> {
    for sample in samples {
        let solver =
            SolverInstance::<ClumsyCrucible>::new(sample.input).map_err(SolverError::from)?;

        for &(part, expected) in sample.expected {
            let actual = solver.solve(part).answer.map_err(SolverError::from)?;
            if actual != expected {
                return Err(CliError::SampleMismatch {
                    sample: sample.name,
                    part,
                    expected: expected.to_string(),
                    actual,
                });
            }
            info!("sample '{}' part {}: {}", sample.name, part, actual);
        }
    }
    Ok(())
}
