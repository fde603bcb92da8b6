use proptest::prelude::*;
use wm_core::{CoreError, ensure_metric, finite_ratio};

proptest! {
    #[test]
    fn non_negative_finite_values_pass_through(v in 0.0_f64..1.0e9) {
        prop_assert_eq!(ensure_metric(v, "v").unwrap(), v);
    }

    #[test]
    fn negative_values_are_rejected(v in -1.0e9_f64..-1.0e-9) {
        let is_invalid_metric = matches!(ensure_metric(v, "v"), Err(CoreError::InvalidMetric { .. }));
        prop_assert!(is_invalid_metric);
    }

    #[test]
    fn ratio_is_plain_division_for_positive_denominators(
        num in 0.0_f64..1.0e6,
        den in 1.0e-3_f64..1.0e6,
    ) {
        prop_assert_eq!(finite_ratio(num, den), Some(num / den));
    }
}
