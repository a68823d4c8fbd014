//! `RegParams`: check bookkeeping for regression tests
//!
//! A regression test creates one `RegParams`, runs any number of
//! `compare_*` checks and finally asserts on [`RegParams::cleanup`].
//! Failed checks are collected rather than panicking, so one run lists
//! every mismatch.

use std::fmt;

use crate::labelmap::render_label_map;
use seedgrow_core::LabelImage;

/// How much a regression test prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Report failures only
    #[default]
    Compare,
    /// Also print the label maps being compared
    Display,
}

impl RegTestMode {
    /// Read `REGTEST_MODE`; anything but `display` selects `Compare`
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE") {
            Ok(v) if v.eq_ignore_ascii_case("display") => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// A failed check
#[derive(Debug, Clone)]
struct Failure {
    index: usize,
    message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "check {}: {}", self.index, self.message)
    }
}

/// State of one regression test
pub struct RegParams {
    pub test_name: String,
    pub mode: RegTestMode,
    index: usize,
    failures: Vec<Failure>,
}

impl RegParams {
    /// Start a regression test; the mode comes from `REGTEST_MODE`
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        eprintln!("\n==== {test_name}_reg ({mode:?}) ====");
        Self {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of checks made so far
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether label maps should be printed
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Advance to the next check and record `outcome`
    fn check(&mut self, outcome: std::result::Result<(), String>) -> bool {
        self.index += 1;
        match outcome {
            Ok(()) => true,
            Err(message) => {
                let failure = Failure {
                    index: self.index,
                    message,
                };
                eprintln!("{}_reg: {}", self.test_name, failure);
                self.failures.push(failure);
                false
            }
        }
    }

    /// Check that `actual` is within `delta` of `expected`
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let diff = (expected - actual).abs();
        let outcome = if diff <= delta {
            Ok(())
        } else {
            Err(format!(
                "expected {expected}, got {actual} (|diff| = {diff} > {delta})"
            ))
        };
        self.check(outcome)
    }

    /// Check that two label images are identical
    pub fn compare_labels(&mut self, expected: &LabelImage, actual: &LabelImage) -> bool {
        if self.display() {
            eprintln!("expected:\n{}", render_label_map(expected));
            eprintln!("actual:\n{}", render_label_map(actual));
        }
        let outcome = if expected.extent() != actual.extent() {
            Err(format!(
                "label extents differ: {} vs {}",
                expected.extent(),
                actual.extent()
            ))
        } else {
            match expected
                .data()
                .iter()
                .zip(actual.data())
                .position(|(a, b)| a != b)
            {
                None => Ok(()),
                Some(i) => {
                    let (x, y, z) = expected.extent().coordinates(i);
                    Err(format!(
                        "label at ({x}, {y}, {z}) is {}, expected {}",
                        actual.data()[i],
                        expected.data()[i]
                    ))
                }
            }
        };
        self.check(outcome)
    }

    /// Check that two byte strings are identical
    pub fn compare_strings(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        let outcome = if expected == actual {
            Ok(())
        } else {
            Err(format!(
                "byte strings differ: {:?} vs {:?}",
                String::from_utf8_lossy(expected),
                String::from_utf8_lossy(actual)
            ))
        };
        self.check(outcome)
    }

    /// Whether every check so far passed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Messages of the failed checks
    pub fn failures(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }

    /// Print a summary and return whether every check passed
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("{}_reg: {} checks passed\n", self.test_name, self.index);
            return true;
        }
        eprintln!(
            "{}_reg: {} of {} checks failed",
            self.test_name,
            self.failures.len(),
            self.index
        );
        for failure in &self.failures {
            eprintln!("  {failure}");
        }
        eprintln!();
        false
    }
}
