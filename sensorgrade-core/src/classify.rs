//! Quality grading against reference conditions
//!
//! One grader per sensor kind, each owning its thresholds with defaults
//! from [`constants`](crate::constants). Grading is pure: the same group
//! and reference always produce the same label.
//!
//! All threshold comparisons are strict on both sides. A thermometer
//! whose mean sits exactly on the ±0.5 °C window edge is not within the
//! window; a spread exactly at a cutoff takes the next grade down. A
//! single reading has NaN spread, which fails every comparison, so
//! single-reading thermometers grade `precise` by design.

use core::fmt;

use crate::constants::{
    HUMIDITY_WINDOW_PCT, STD_DEV_ULTRA_PRECISE, STD_DEV_VERY_PRECISE, TEMPERATURE_WINDOW_C,
};
use crate::reading::{Reference, SensorGroup, SensorKind};
use crate::stats;

/// Quality label emitted for a finalized sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityLabel {
    /// Thermometer: mean within the window, spread under the low cutoff
    UltraPrecise,
    /// Thermometer: mean within the window, spread under the high cutoff
    VeryPrecise,
    /// Thermometer: everything else
    Precise,
    /// Humidity sensor: mean within the humidity window
    Ok,
    /// Humidity sensor: mean outside the humidity window
    Discard,
}

impl QualityLabel {
    /// Label text as it appears in the report output
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UltraPrecise => "ultra precise",
            Self::VeryPrecise => "very precise",
            Self::Precise => "precise",
            Self::Ok => "OK",
            Self::Discard => "discard",
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grades thermometers by mean accuracy and spread
#[derive(Debug, Clone)]
pub struct ThermometerGrader {
    /// Allowed deviation of the mean from the reference, in °C
    window_c: f64,

    /// Spread ceiling for `ultra precise`
    ultra_max_dev: f64,

    /// Spread ceiling for `very precise`
    very_max_dev: f64,
}

impl Default for ThermometerGrader {
    fn default() -> Self {
        Self {
            window_c: TEMPERATURE_WINDOW_C,
            ultra_max_dev: STD_DEV_ULTRA_PRECISE,
            very_max_dev: STD_DEV_VERY_PRECISE,
        }
    }
}

impl ThermometerGrader {
    /// Grade a thermometer's readings against the reference temperature
    pub fn grade(&self, reference_temperature: f64, readings: &[f64]) -> QualityLabel {
        let mean = stats::mean(readings);
        let dev = stats::sample_std_dev(mean, readings);

        let within_window = mean > reference_temperature - self.window_c
            && mean < reference_temperature + self.window_c;

        if within_window && dev < self.ultra_max_dev {
            QualityLabel::UltraPrecise
        } else if within_window && dev < self.very_max_dev {
            QualityLabel::VeryPrecise
        } else {
            // Also the landing spot for NaN spread (single reading)
            QualityLabel::Precise
        }
    }
}

/// Grades humidity sensors by mean accuracy
#[derive(Debug, Clone)]
pub struct HumidityGrader {
    /// Allowed deviation of the mean from the reference, in %RH
    window_pct: f64,
}

impl Default for HumidityGrader {
    fn default() -> Self {
        Self {
            window_pct: HUMIDITY_WINDOW_PCT,
        }
    }
}

impl HumidityGrader {
    /// Grade a humidity sensor's readings against the reference humidity
    pub fn grade(&self, reference_humidity: f64, readings: &[f64]) -> QualityLabel {
        let mean = stats::mean(readings);

        if mean > reference_humidity - self.window_pct
            && mean < reference_humidity + self.window_pct
        {
            QualityLabel::Ok
        } else {
            QualityLabel::Discard
        }
    }
}

/// Grade a finalized group against the room reference with the default
/// thresholds for its sensor kind.
pub fn grade(group: &SensorGroup, reference: &Reference) -> QualityLabel {
    match group.kind() {
        SensorKind::Thermometer => {
            ThermometerGrader::default().grade(reference.temperature, group.readings())
        }
        SensorKind::Humidity => {
            HumidityGrader::default().grade(reference.humidity, group.readings())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_thermometer_is_ultra_precise() {
        let grader = ThermometerGrader::default();
        let label = grader.grade(20.0, &[20.1, 19.9, 20.0]);
        assert_eq!(label, QualityLabel::UltraPrecise);
    }

    #[test]
    fn wide_spread_within_window_is_very_precise() {
        let grader = ThermometerGrader::default();
        // Mean 20.0, sample deviation sqrt(18) ≈ 4.24
        let label = grader.grade(20.0, &[17.0, 23.0]);
        assert_eq!(label, QualityLabel::VeryPrecise);
    }

    #[test]
    fn mean_outside_window_is_precise() {
        let grader = ThermometerGrader::default();
        let label = grader.grade(20.0, &[21.0, 21.0, 21.0]);
        assert_eq!(label, QualityLabel::Precise);
    }

    #[test]
    fn mean_on_window_edge_is_precise() {
        let grader = ThermometerGrader::default();
        // Zero spread, but the mean sits exactly on reference + 0.5
        let label = grader.grade(20.0, &[20.5, 20.5]);
        assert_eq!(label, QualityLabel::Precise);
    }

    #[test]
    fn single_reading_grades_precise() {
        let grader = ThermometerGrader::default();
        // NaN spread fails every cutoff even with a perfect mean
        let label = grader.grade(20.0, &[20.0]);
        assert_eq!(label, QualityLabel::Precise);
    }

    #[test]
    fn humidity_within_window_is_ok() {
        let grader = HumidityGrader::default();
        assert_eq!(grader.grade(50.0, &[49.5, 50.3]), QualityLabel::Ok);
    }

    #[test]
    fn humidity_outside_window_is_discarded() {
        let grader = HumidityGrader::default();
        // Mean is reference + 2
        assert_eq!(grader.grade(50.0, &[52.0, 52.0]), QualityLabel::Discard);
    }

    #[test]
    fn humidity_on_window_edge_is_discarded() {
        let grader = HumidityGrader::default();
        assert_eq!(grader.grade(50.0, &[51.0, 51.0]), QualityLabel::Discard);
    }

    #[test]
    fn grading_is_idempotent() {
        let mut group = SensorGroup::new(SensorKind::Thermometer, "temp-1");
        group.record(20.1);
        group.record(19.9);
        let reference = Reference {
            temperature: 20.0,
            humidity: 50.0,
        };

        let first = grade(&group, &reference);
        let second = grade(&group, &reference);
        assert_eq!(first, second);
    }

    #[test]
    fn label_text_matches_report_output() {
        assert_eq!(QualityLabel::UltraPrecise.as_str(), "ultra precise");
        assert_eq!(QualityLabel::VeryPrecise.as_str(), "very precise");
        assert_eq!(QualityLabel::Precise.as_str(), "precise");
        assert_eq!(QualityLabel::Ok.as_str(), "OK");
        assert_eq!(QualityLabel::Discard.as_str(), "discard");
    }
}
