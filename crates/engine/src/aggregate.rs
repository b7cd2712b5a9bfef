use crate::ExpenseLog;

/// Total spending over the whole log, recomputed on every call.
///
/// No rounding happens here. Non-finite amounts are skipped; validated
/// records never carry one.
pub fn total(log: &ExpenseLog) -> f64 {
    log.iter()
        .map(|record| record.amount())
        .filter(|amount| amount.is_finite())
        .fold(0.0, |sum, amount| sum + amount)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ExpenseRecord;

    fn log_of(amounts: &[f64]) -> ExpenseLog {
        amounts
            .iter()
            .map(|amount| {
                ExpenseRecord::try_from(&json!({
                    "amount": amount,
                    "category": "Misc",
                    "created_at": "2024-01-01T10:00:00"
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn empty_log_totals_zero() {
        let sum = total(&ExpenseLog::new());
        assert_eq!(sum, 0.0);
        assert!(sum.is_sign_positive());
    }

    #[test]
    fn sums_all_amounts() {
        assert_eq!(total(&log_of(&[10.0, 2.5, 7.5])), 20.0);
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(
            total(&log_of(&[7.5, 10.0, 2.5])),
            total(&log_of(&[2.5, 7.5, 10.0]))
        );
    }

    #[test]
    fn no_rounding_is_applied() {
        let sum = total(&log_of(&[0.1, 0.2]));
        assert!((sum - 0.3).abs() < 1e-12);
        assert_ne!(sum, 0.3);
    }
}
