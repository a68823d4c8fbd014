//! seedgrow-test - Regression test framework for seedgrow
//!
//! Provides [`RegParams`], which numbers every check of a regression test,
//! records failures and reports them at the end, plus helpers to write label
//! images as text.
//!
//! # Usage
//!
//! ```ignore
//! use seedgrow_test::RegParams;
//!
//! let mut rp = RegParams::new("srg");
//! rp.compare_values(16.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print label maps while testing

mod error;
mod labelmap;
mod params;

pub use error::{TestError, TestResult};
pub use labelmap::{parse_label_map, render_label_map};
pub use params::{RegParams, RegTestMode};
