//! Log grading state machine
//!
//! A single pass over the log lines, carrying the room reference, the
//! sensor group currently accumulating, and run counters. Per line, in
//! order:
//!
//! 1. Line 1 starting with the `reference` token sets the room
//!    conditions.
//! 2. A line whose first token equals the open group's name appends its
//!    third token as a reading. Name comparison is exact field equality,
//!    so sensor `A` never captures lines belonging to sensor `AB`.
//! 3. A line whose first token names a sensor kind finalizes the open
//!    group (grade, emit) and starts a new one named by its second token.
//! 4. Anything else is reported as an invalid line and skipped.
//!
//! A group is only graded when it holds at least one reading; an
//! introduction that never collected a reading is dropped without output.
//! Numeric parse failures and short structural lines abort the whole run
//! at the offending line.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::classify::{self, QualityLabel};
use crate::errors::{ReportError, ReportResult};
use crate::reading::{Reference, SensorGroup, SensorKind};

/// Leading token of the optional first line carrying room conditions
const REFERENCE_MARKER: &str = "reference";

/// Counters kept while grading
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportStats {
    /// Total lines consumed
    pub lines_processed: usize,
    /// Readings appended to sensor groups
    pub readings_recorded: usize,
    /// Sensors graded and emitted
    pub sensors_graded: usize,
    /// Lines that matched no structural rule
    pub invalid_lines: usize,
}

/// One output record of a grading run
///
/// `Display` renders the exact report text, one finding per line.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// A finalized sensor and its grade
    Grade {
        /// Sensor name as read from its introduction line
        sensor: String,
        /// Grade assigned to the sensor
        label: QualityLabel,
    },
    /// A line that matched no structural rule (non-fatal)
    InvalidLine {
        /// 1-based number of the offending line
        line: usize,
    },
    /// The log held no lines at all
    NoInput,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grade { sensor, label } => write!(f, "{} {}", sensor, label),
            Self::InvalidLine { line } => write!(f, "Invalid Input at line {}", line),
            Self::NoInput => write!(f, "No input found"),
        }
    }
}

/// Line-by-line grading state machine
///
/// Feed lines with [`process_line`](Self::process_line), then call
/// [`finish`](Self::finish) once the input ends so the trailing group is
/// graded. The convenience drivers [`grade_lines`] and [`grade_file`] do
/// both.
#[derive(Debug, Default)]
pub struct LogGrader {
    reference: Reference,
    current: Option<SensorGroup>,
    stats: ReportStats,
}

impl LogGrader {
    /// Fresh grader with default (0/0) reference conditions
    pub fn new() -> Self {
        Self::default()
    }

    /// Room conditions seen so far
    pub fn reference(&self) -> Reference {
        self.reference
    }

    /// Counters for the lines consumed so far
    pub fn stats(&self) -> &ReportStats {
        &self.stats
    }

    /// Consume one line, emitting any finding it produces
    pub fn process_line<F>(&mut self, line: &str, emit: &mut F) -> ReportResult<()>
    where
        F: FnMut(Finding),
    {
        self.stats.lines_processed += 1;
        let line_no = self.stats.lines_processed;
        let fields: Vec<&str> = line.split_whitespace().collect();

        // Rule 1: reference line, recognized on the first line only
        if line_no == 1 && fields.first().copied() == Some(REFERENCE_MARKER) {
            self.reference = Reference {
                temperature: parse_number(&fields, 1, "reference temperature", line_no)?,
                humidity: parse_number(&fields, 2, "reference humidity", line_no)?,
            };
            debug!(
                "reference conditions: {} °C, {} %RH",
                self.reference.temperature, self.reference.humidity
            );
            return Ok(());
        }

        // Rule 2: continuation of the open group, matched by exact name
        if let Some(group) = self.current.as_mut() {
            if fields.first().copied() == Some(group.name()) {
                let value = parse_number(&fields, 2, "reading value", line_no)?;
                group.record(value);
                self.stats.readings_recorded += 1;
                return Ok(());
            }
        }

        // Rule 3: introduction of a new sensor
        if let Some(kind) = fields.first().and_then(|t| SensorKind::from_token(t)) {
            self.finalize(emit);
            let name = *fields.get(1).ok_or(ReportError::MissingField {
                line: line_no,
                field: "sensor name",
            })?;
            self.current = Some(SensorGroup::new(kind, name));
            return Ok(());
        }

        // Rule 4: nothing matched
        warn!("unrecognized line {}: {:?}", line_no, line);
        self.stats.invalid_lines += 1;
        emit(Finding::InvalidLine { line: line_no });
        Ok(())
    }

    /// Signal end of input: grade the trailing group, or report an empty
    /// log. Returns the run counters.
    pub fn finish<F>(mut self, emit: &mut F) -> ReportStats
    where
        F: FnMut(Finding),
    {
        self.finalize(emit);
        if self.stats.lines_processed == 0 {
            emit(Finding::NoInput);
        }
        self.stats
    }

    /// Grade the open group, if it holds any readings, and emit the
    /// result. An empty group carries no signal and is dropped; this also
    /// covers the very first introduction line, which has no predecessor
    /// to grade.
    fn finalize<F>(&mut self, emit: &mut F)
    where
        F: FnMut(Finding),
    {
        if let Some(group) = self.current.take() {
            if !group.is_empty() {
                let label = classify::grade(&group, &self.reference);
                debug!(
                    "graded {} from {} readings: {}",
                    group.name(),
                    group.readings().len(),
                    label
                );
                self.stats.sensors_graded += 1;
                emit(Finding::Grade {
                    sensor: group.name().to_string(),
                    label,
                });
            }
        }
    }
}

fn parse_number(
    fields: &[&str],
    index: usize,
    field: &'static str,
    line: usize,
) -> ReportResult<f64> {
    let token = fields
        .get(index)
        .ok_or(ReportError::MissingField { line, field })?;
    token.parse::<f64>().map_err(|_| ReportError::MalformedNumber {
        line,
        token: (*token).to_string(),
    })
}

/// Grade an in-memory sequence of lines
pub fn grade_lines<'a, I, F>(lines: I, emit: &mut F) -> ReportResult<ReportStats>
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(Finding),
{
    let mut grader = LogGrader::new();
    for line in lines {
        grader.process_line(line, emit)?;
    }
    Ok(grader.finish(emit))
}

/// Grade a log file from disk
pub fn grade_file<P, F>(path: P, emit: &mut F) -> ReportResult<ReportStats>
where
    P: AsRef<Path>,
    F: FnMut(Finding),
{
    let file = File::open(path.as_ref()).map_err(|source| ReportError::Open {
        path: path.as_ref().to_path_buf(),
        source,
    })?;

    let mut grader = LogGrader::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| ReportError::Read {
            line: grader.stats().lines_processed + 1,
            source,
        })?;
        grader.process_line(&line, emit)?;
    }
    Ok(grader.finish(emit))
}
