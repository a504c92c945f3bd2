//! Numeric formatting for the calculator.
//!
//! Two layers, kept strictly separate:
//!
//! - Canonical formatting ([`format_result`], [`format_number`]) produces
//!   the strings the engine stores in its display and expression state.
//! - Display formatting ([`format_display`]) is a pure presentation
//!   transform applied when rendering: thousands grouping plus a comma
//!   decimal separator. It carries no state and never feeds back into
//!   the engine.
//!
//! All arithmetic is plain f64, so rounding artifacts like `0.1 + 0.2`
//! are expected; [`format_result`] fixes results to 10 fractional digits
//! before trimming so those artifacts never reach the display.

/// Format a computed result for the display.
///
/// Integral finite results render without a decimal point (`4.0` → `"4"`).
/// Non-integral results are fixed to 10 fractional digits with trailing
/// zeros (and a dangling point) stripped. Non-finite values keep their
/// standard form (`inf`, `-inf`, `NaN`) and flow through the display like
/// any other value.
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    if value == value.trunc() {
        return format!("{value}");
    }
    let fixed = format!("{value:.10}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Shortest textual form of an intermediate value.
///
/// Used where the engine folds a transformed value back into its display
/// or expression (sign toggle, percent): integral values carry no point,
/// everything else uses the shortest round-trip representation. Negative
/// zero normalizes to `"0"`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 && !value.is_nan() {
        return "0".to_string();
    }
    value.to_string()
}

/// Presentation transform over a canonical numeric string.
///
/// Groups the integer part in thousands and substitutes a comma for the
/// decimal point. Strings that are not plain decimal numerals (`inf`,
/// `NaN`, scientific notation) pass through untouched.
pub fn format_display(value: &str) -> String {
    if value.is_empty() || value == "0" {
        return "0".to_string();
    }

    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };

    let (integer, decimal) = match unsigned.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (unsigned, None),
    };

    // Anything beyond plain digits is not groupable; leave it alone.
    if !integer.chars().all(|c| c.is_ascii_digit())
        || decimal.is_some_and(|d| !d.chars().all(|c| c.is_ascii_digit()))
    {
        return value.to_string();
    }

    let mut grouped = group_thousands(integer);
    if let Some(decimal) = decimal {
        grouped.push(',');
        grouped.push_str(decimal);
    }
    if negative {
        grouped.insert(0, '-');
    }
    grouped
}

/// Group a digit run in threes from the right, dropping leading zeros.
fn group_thousands(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let trimmed = if trimmed.is_empty() { "0" } else { trimmed };

    let mut out = String::with_capacity(trimmed.len() + trimmed.len() / 3);
    let offset = trimmed.len() % 3;
    for (i, c) in trimmed.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_results_have_no_point() {
        assert_eq!(format_result(4.0), "4");
        assert_eq!(format_result(-12.0), "-12");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(1000000.0), "1000000");
    }

    #[test]
    fn test_fractional_results_fix_to_ten_digits() {
        assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_result(2.0 / 3.0), "0.6666666667");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(1.23), "1.23");
    }

    #[test]
    fn test_non_finite_passes_through() {
        assert_eq!(format_result(f64::INFINITY), "inf");
        assert_eq!(format_result(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_result(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_number_shortest() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-5.5), "-5.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.07), "0.07");
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(format_display("0"), "0");
        assert_eq!(format_display(""), "0");
        assert_eq!(format_display("7"), "7");
        assert_eq!(format_display("1234"), "1 234");
        assert_eq!(format_display("1234567"), "1 234 567");
        assert_eq!(format_display("-1234567"), "-1 234 567");
    }

    #[test]
    fn test_display_decimal_comma() {
        assert_eq!(format_display("3.14"), "3,14");
        assert_eq!(format_display("1234.5"), "1 234,5");
        assert_eq!(format_display("-0.25"), "-0,25");
        // Mid-entry state: a pending decimal point keeps its comma.
        assert_eq!(format_display("0."), "0,");
    }

    #[test]
    fn test_display_drops_leading_zeros() {
        assert_eq!(format_display("007"), "7");
        assert_eq!(format_display("000"), "0");
    }

    #[test]
    fn test_display_passes_non_numerals_through() {
        assert_eq!(format_display("inf"), "inf");
        assert_eq!(format_display("-inf"), "-inf");
        assert_eq!(format_display("NaN"), "NaN");
    }
}
