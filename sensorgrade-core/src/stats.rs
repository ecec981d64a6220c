//! Aggregate statistics over a sensor's readings
//!
//! Pure functions, no allocation, no side effects. These are the only
//! numeric operations the grader performs, so their edge-case behavior is
//! pinned down here rather than left to callers.

/// Arithmetic mean of the readings.
///
/// Precondition: `values` is non-empty. The grader never finalizes an
/// empty group, so this is debug-asserted rather than returned as an
/// error; an empty slice yields NaN in release builds, never a panic.
pub fn mean(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty(), "mean of an empty slice");
    let sum: f64 = values.iter().sum();
    sum / values.len() as f64
}

/// Sample standard deviation with Bessel's correction.
///
/// Computes `sqrt(Σ(v - mean)² / (n - 1))` with the denominator in
/// floating point, so a single reading yields NaN rather than a division
/// fault. Grading compares the result with strict `<` thresholds; NaN
/// fails every one of them, so single-reading thermometers fall through
/// to the least precise grade. That fallthrough is intentional.
///
/// The mean is taken as a parameter so callers that already computed it
/// do not pay for it twice.
pub fn sample_std_dev(mean: f64, values: &[f64]) -> f64 {
    let sum_sq: f64 = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum();
    (sum_sq / (values.len() as f64 - 1.0)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mean_of_single_reading_is_the_reading() {
        assert_eq!(mean(&[4.2]), 4.2);
    }

    #[test]
    fn mean_of_pair() {
        assert_eq!(mean(&[1.0, 2.0]), 1.5);
    }

    #[test]
    fn single_reading_deviation_is_nan() {
        let values = [20.0];
        let m = mean(&values);
        assert!(sample_std_dev(m, &values).is_nan());
    }

    #[test]
    fn known_deviation() {
        // Sample variance 32/7 for this classic set
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&values);
        assert_eq!(m, 5.0);
        let dev = sample_std_dev(m, &values);
        assert!((dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn identical_readings_have_zero_deviation() {
        let values = [3.3; 5];
        assert_eq!(sample_std_dev(mean(&values), &values), 0.0);
    }

    proptest! {
        #[test]
        fn mean_stays_within_bounds(values in prop::collection::vec(-100.0f64..100.0, 1..64)) {
            let m = mean(&values);
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(m >= min - 1e-9);
            prop_assert!(m <= max + 1e-9);
        }

        #[test]
        fn deviation_is_non_negative(values in prop::collection::vec(-100.0f64..100.0, 2..64)) {
            let dev = sample_std_dev(mean(&values), &values);
            prop_assert!(dev >= 0.0);
        }
    }
}
