//! Lenient numeric parsing for form inputs.
//!
//! Form fields are parsed the way a browser number field is read: leading
//! whitespace is skipped and the longest numeric prefix wins, so `"12abc"`
//! reads as 12. Callers decide what a failed parse falls back to.

/// Parse the longest floating-point prefix of `input`.
///
/// Accepts an optional sign, digits with an optional fractional part and an
/// optional exponent. Returns `None` when no digits are found or the value
/// is not finite.
///
/// # Examples
/// ```
/// use catalog_admin::parse::leading_float;
///
/// assert_eq!(leading_float(" 7.5"), Some(7.5));
/// assert_eq!(leading_float("12abc"), Some(12.0));
/// assert_eq!(leading_float("abc"), None);
/// ```
pub fn leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the longest integer prefix of `input` (optional sign, then digits).
pub fn leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    s[..end].parse::<i64>().ok()
}

/// Parse a non-negative integer prefix, mapping anything else to zero.
pub fn count_or_zero(input: &str) -> u64 {
    leading_int(input)
        .and_then(|v| u64::try_from(v).ok())
        .unwrap_or(0)
}

/// Extract the first maximal run of ASCII digits anywhere in `input`.
///
/// `"qty:100 box"` yields 100. Returns `None` when there are no digits or the
/// run does not fit in a `u64`.
pub fn first_digit_run(input: &str) -> Option<u64> {
    let start = input.find(|c: char| c.is_ascii_digit())?;
    let rest = &input[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    rest[..len].parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_float_plain_values() {
        assert_eq!(leading_float("100"), Some(100.0));
        assert_eq!(leading_float("0"), Some(0.0));
        assert_eq!(leading_float("99.99"), Some(99.99));
        assert_eq!(leading_float("-5"), Some(-5.0));
        assert_eq!(leading_float("+5"), Some(5.0));
    }

    #[test]
    fn test_leading_float_prefix_and_whitespace() {
        assert_eq!(leading_float("  42.5kg"), Some(42.5));
        assert_eq!(leading_float("12abc"), Some(12.0));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("5."), Some(5.0));
        assert_eq!(leading_float("1e3"), Some(1000.0));
        assert_eq!(leading_float("1e"), Some(1.0));
        assert_eq!(leading_float("2E-2x"), Some(0.02));
    }

    #[test]
    fn test_leading_float_rejects_non_numbers() {
        assert_eq!(leading_float(""), None);
        assert_eq!(leading_float("   "), None);
        assert_eq!(leading_float("abc"), None);
        assert_eq!(leading_float("-"), None);
        assert_eq!(leading_float("."), None);
        assert_eq!(leading_float("NaN"), None);
        assert_eq!(leading_float("inf"), None);
    }

    #[test]
    fn test_leading_float_rejects_overflow() {
        assert_eq!(leading_float("1e999"), None);
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("3"), Some(3));
        assert_eq!(leading_int(" 3 cases"), Some(3));
        assert_eq!(leading_int("3.9"), Some(3));
        assert_eq!(leading_int("-2"), Some(-2));
        assert_eq!(leading_int("x3"), None);
        assert_eq!(leading_int(""), None);
    }

    #[test]
    fn test_count_or_zero() {
        assert_eq!(count_or_zero("5"), 5);
        assert_eq!(count_or_zero("-5"), 0);
        assert_eq!(count_or_zero("five"), 0);
    }

    #[test]
    fn test_first_digit_run() {
        assert_eq!(first_digit_run("qty:100 box"), Some(100));
        assert_eq!(first_digit_run("100"), Some(100));
        assert_eq!(first_digit_run("box of 12, 24 max"), Some(12));
        assert_eq!(first_digit_run("no digits here"), None);
        assert_eq!(first_digit_run("99999999999999999999999"), None);
    }
}
