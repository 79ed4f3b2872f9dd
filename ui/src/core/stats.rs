//! Small numeric helpers shared by the dashboard summaries.

/// Arithmetic mean with an explicit empty-input policy: an empty slice
/// yields `0.0` rather than dividing by zero.
pub fn mean(values: &[f64]) -> f64 {
    try_mean(values).unwrap_or(0.0)
}

/// Mean that keeps "no samples" distinguishable from a true zero.
pub fn try_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().copied().sum::<f64>() / values.len() as f64)
    }
}

/// Round to two decimal places for summary display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_matches_sum_over_len() {
        let marks = [78.0, 65.0, 70.0, 85.0, 90.0];
        let expected = marks.iter().sum::<f64>() / marks.len() as f64;
        assert!((mean(&marks) - expected).abs() < 1e-9);
        assert!((mean(&marks) - 77.6).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_sentinel_not_panic() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(try_mean(&[]), None);
    }

    #[test]
    fn single_sample_is_its_own_mean() {
        assert_eq!(mean(&[42.0]), 42.0);
        assert_eq!(try_mean(&[42.0]), Some(42.0));
    }

    #[test]
    fn round2_truncates_to_cents() {
        assert_eq!(round2(77.604), 77.6);
        assert_eq!(round2(77.666), 77.67);
    }
}
