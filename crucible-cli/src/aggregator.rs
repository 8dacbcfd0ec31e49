//! Puts results arriving from worker threads back into (input, part) order
//!
//! Inputs are numbered densely from zero and every input is solved for the
//! same part range, so each expected result owns a fixed slot. Results wait in
//! their slot until every slot before them has been emitted.

use crate::executor::SolverResult;
use log::warn;
use std::ops::RangeInclusive;

pub struct ResultAggregator {
    parts: RangeInclusive<u8>,
    slots: Vec<Option<SolverResult>>,
    /// First slot not yet emitted
    next: usize,
}

impl ResultAggregator {
    pub fn new(inputs: usize, parts: RangeInclusive<u8>) -> Self {
        let per_input = parts.clone().count();
        Self {
            parts,
            slots: std::iter::repeat_with(|| None)
                .take(inputs * per_input)
                .collect(),
            next: 0,
        }
    }

    fn slot(&self, input: usize, part: u8) -> Option<usize> {
        if !self.parts.contains(&part) {
            return None;
        }
        let per_input = self.parts.clone().count();
        let index = input * per_input + usize::from(part - self.parts.start());
        (index < self.slots.len()).then_some(index)
    }

    /// Store `result` and return every result now ready, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        match self.slot(result.input, result.part) {
            Some(index) if self.slots[index].is_none() && index >= self.next => {
                self.slots[index] = Some(result);
            }
            _ => {
                warn!(
                    "dropping unexpected result for input {} part {}",
                    result.input, result.part
                );
                return Vec::new();
            }
        }

        let mut ready = Vec::new();
        while let Some(result) = self.slots.get_mut(self.next).and_then(Option::take) {
            ready.push(result);
            self.next += 1;
        }
        ready
    }

    /// Everything still buffered behind a missing result, in order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let rest = self.slots.split_off(self.next.min(self.slots.len()));
        rest.into_iter().flatten().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.next == self.slots.len()
    }
}
