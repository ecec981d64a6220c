//! Sensor log quality grading
//!
//! Reads a plain-text sensor log, groups consecutive readings by sensor,
//! and grades each sensor's accuracy against the room's reference
//! conditions. Thermometers are graded on mean accuracy and spread,
//! humidity sensors on mean accuracy alone.
//!
//! The whole run is a single synchronous pass over the input lines: no
//! state survives it beyond the counters returned at the end.
//!
//! ```
//! use sensorgrade_core::report::grade_lines;
//!
//! let log = [
//!     "reference 20 50",
//!     "thermometer temp-1",
//!     "temp-1 2026-08-28T10:00 20.1",
//!     "temp-1 2026-08-28T10:01 19.9",
//! ];
//!
//! let mut findings = Vec::new();
//! grade_lines(log, &mut |f| findings.push(f)).unwrap();
//! assert_eq!(findings[0].to_string(), "temp-1 ultra precise");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod classify;
pub mod constants;
pub mod errors;
pub mod reading;
pub mod report;
pub mod stats;

// Public API
pub use classify::{HumidityGrader, QualityLabel, ThermometerGrader};
pub use errors::{ReportError, ReportResult};
pub use reading::{Reference, SensorGroup, SensorKind};
pub use report::{grade_file, grade_lines, Finding, LogGrader, ReportStats};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
