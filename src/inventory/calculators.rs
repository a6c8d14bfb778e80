//! Quantity calculation functions

use crate::parse::{count_or_zero, first_digit_run};

/// Total units available from a case-size descriptor and a received case count.
///
/// Uses the first run of digits in `case_quantity` as units per case.
/// Returns 0 when either input is empty or the descriptor has no digits.
///
/// # Examples
/// ```
/// use catalog_admin::inventory::compute_total_quantity;
///
/// assert_eq!(compute_total_quantity("qty:100 box", "3"), 300);
/// assert_eq!(compute_total_quantity("no digits here", "5"), 0);
/// ```
pub fn compute_total_quantity(case_quantity: &str, received_case: &str) -> u64 {
    if case_quantity.is_empty() || received_case.is_empty() {
        return 0;
    }

    match first_digit_run(case_quantity) {
        Some(per_case) => per_case.saturating_mul(count_or_zero(received_case)),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_quantity_from_descriptor() {
        assert_eq!(compute_total_quantity("qty:100 box", "3"), 300);
        assert_eq!(compute_total_quantity("100", "3"), 300);
        assert_eq!(compute_total_quantity("12 pcs x 4 packs", "2"), 24);
    }

    #[test]
    fn test_total_quantity_without_digits() {
        assert_eq!(compute_total_quantity("no digits here", "5"), 0);
    }

    #[test]
    fn test_total_quantity_empty_inputs() {
        assert_eq!(compute_total_quantity("", "5"), 0);
        assert_eq!(compute_total_quantity("qty:100", ""), 0);
        assert_eq!(compute_total_quantity("", ""), 0);
    }

    #[test]
    fn test_total_quantity_invalid_case_count() {
        assert_eq!(compute_total_quantity("qty:100", "many"), 0);
        assert_eq!(compute_total_quantity("qty:100", "-3"), 0);
        assert_eq!(compute_total_quantity("qty:100", "3 cases"), 300);
    }

    #[test]
    fn test_total_quantity_saturates() {
        assert_eq!(
            compute_total_quantity("18446744073709551615", "2"),
            u64::MAX
        );
    }
}
