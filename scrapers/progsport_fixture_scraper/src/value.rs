/// Expected value of a one-unit bet at decimal `odds` given a predicted win
/// probability in percent: `(probability / 100) * odds - 1`. Positive means
/// the model thinks the bet is underpriced.
///
/// Returns `None` when either input is missing. No rounding here; the
/// reporter rounds for display.
pub fn calculate_value(odds: Option<f64>, predict_win: Option<f64>) -> Option<f64> {
    Some(predict_win? / 100.0 * odds? - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_formula() {
        let v = calculate_value(Some(2.0), Some(60.0)).unwrap();
        assert!((v - 0.2).abs() < 1e-12);
        let v = calculate_value(Some(2.5), Some(40.0)).unwrap();
        assert!(v.abs() < 1e-12);
        // Fair coin at even money is a losing bet after the margin
        let v = calculate_value(Some(1.9), Some(50.0)).unwrap();
        assert!((v - (-0.05)).abs() < 1e-12);
    }

    #[test]
    fn test_value_absent_inputs() {
        assert_eq!(calculate_value(None, Some(60.0)), None);
        assert_eq!(calculate_value(Some(2.0), None), None);
        assert_eq!(calculate_value(None, None), None);
    }
}
