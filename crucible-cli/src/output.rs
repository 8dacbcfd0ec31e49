//! Terminal output for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::fmt;

/// How results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Answers only, errors on stderr
    Quiet,
    /// Labelled answers with timings, then a summary
    Full,
}

impl OutputMode {
    pub fn new(quiet: bool) -> Self {
        if quiet { Self::Quiet } else { Self::Full }
    }

    pub fn print_result(self, result: &SolverResult) {
        match (&result.answer, self) {
            (Ok(answer), Self::Quiet) => println!("{}", answer),
            (Ok(answer), Self::Full) => println!("{}", answer_line(result, answer)),
            (Err(e), Self::Quiet) => eprintln!("Error: {}", e),
            (Err(e), Self::Full) => {
                eprintln!("{} Part {}: Error - {}", result.label, result.part, e)
            }
        }
    }

    pub fn print_summary(self, summary: &Summary) {
        if self == Self::Full {
            println!();
            println!("{}", summary);
        }
    }
}

/// Totals over every printed result
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    solved: usize,
    failed: usize,
    parse_time: TimeDelta,
    solve_time: TimeDelta,
}

impl Summary {
    pub fn record(&mut self, result: &SolverResult) {
        match result.answer {
            Ok(_) => self.solved += 1,
            Err(_) => self.failed += 1,
        }
        self.parse_time += result.parse_duration.unwrap_or_default();
        self.solve_time += result.solve_duration;
    }

    pub fn failed(&self) -> usize {
        self.failed
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Summary ---")?;
        writeln!(f, "Parts: {} solved, {} failed", self.solved, self.failed)?;
        write!(
            f,
            "Time: {} parsing, {} solving",
            format_duration(self.parse_time),
            format_duration(self.solve_time)
        )
    }
}

fn answer_line(result: &SolverResult, answer: &str) -> String {
    let solve = format_duration(result.solve_duration);
    match result.parse_duration {
        Some(parse) => format!(
            "{} Part {}: {} (parse: {}, solve: {})",
            result.label,
            result.part,
            answer,
            format_duration(parse),
            solve
        ),
        None => format!(
            "{} Part {}: {} (solve: {})",
            result.label, result.part, answer, solve
        ),
    }
}

/// Human-scaled duration: µs below a millisecond, ms below a second
fn format_duration(d: TimeDelta) -> String {
    match d.num_microseconds() {
        None => "N/A".to_string(),
        Some(us) if us < 0 => format!("-{}", format_duration(-d)),
        Some(us @ 0..1_000) => format!("{}µs", us),
        Some(us @ 1_000..1_000_000) => format!("{:.2}ms", us as f64 / 1e3),
        Some(us) => format!("{:.2}s", us as f64 / 1e6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crucible_core::{ParseError, SolverError};

    fn result(part: u8, answer: Result<String, SolverError>) -> SolverResult {
        SolverResult {
            input: 0,
            label: "day17.txt".to_string(),
            part,
            answer,
            solve_duration: TimeDelta::microseconds(800),
            parse_duration: (part == 1).then(|| TimeDelta::microseconds(40)),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
    }

    #[test]
    fn test_answer_line() {
        assert_eq!(
            answer_line(&result(1, Ok("102".into())), "102"),
            "day17.txt Part 1: 102 (parse: 40µs, solve: 800µs)"
        );
        assert_eq!(
            answer_line(&result(2, Ok("94".into())), "94"),
            "day17.txt Part 2: 94 (solve: 800µs)"
        );
    }

    #[test]
    fn test_summary_totals() {
        let mut summary = Summary::default();
        summary.record(&result(1, Ok("102".into())));
        summary.record(&result(2, Err(ParseError::Empty.into())));
        assert_eq!(summary.failed(), 1);
        assert_eq!(
            summary.to_string(),
            "--- Summary ---\nParts: 1 solved, 1 failed\nTime: 40µs parsing, 1.60ms solving"
        );
    }
}
