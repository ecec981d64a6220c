//! Grading Thresholds
//!
//! Fixed thresholds used to grade sensors against the room's reference
//! conditions. All comparisons against these values are strict on both
//! sides: a mean sitting exactly on a window edge, or a spread exactly at
//! a cutoff, takes the next grade down.

// ===== THERMOMETER GRADES =====

/// Allowed deviation of a thermometer's mean from the reference
/// temperature, in °C.
///
/// A thermometer whose mean falls outside this window is graded
/// `precise` regardless of its spread.
pub const TEMPERATURE_WINDOW_C: f64 = 0.5;

/// Sample standard deviation ceiling for the `ultra precise` grade, in °C.
pub const STD_DEV_ULTRA_PRECISE: f64 = 3.0;

/// Sample standard deviation ceiling for the `very precise` grade, in °C.
///
/// Spread at or above this value always grades `precise`.
pub const STD_DEV_VERY_PRECISE: f64 = 5.0;

// ===== HUMIDITY GRADES =====

/// Allowed deviation of a humidity sensor's mean from the reference
/// humidity, in %RH.
///
/// Within the window the sensor is kept (`OK`), outside it is discarded.
pub const HUMIDITY_WINDOW_PCT: f64 = 1.0;
