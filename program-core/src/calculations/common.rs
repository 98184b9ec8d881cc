//! Loose integer coercion for numeric form text.
//!
//! Form inputs are free text, so numbers are read the forgiving way a browser
//! reads them: leading whitespace is skipped, an optional sign and `0x` prefix
//! are honoured, and parsing stops at the first character that is not a digit.

/// Value substituted when text holds no leading integer.
///
/// Must stay non-positive so that every `> 0` guard fails on bad input.
pub const PARSE_DEFAULT: i64 = 0;

const _: () = assert!(PARSE_DEFAULT <= 0);

/// Parses the leading integer of `s`.
///
/// Returns `None` when no digits follow the optional sign and prefix.
/// Out-of-range values saturate at the `i64` bounds.
///
/// # Examples
///
/// ```
/// use program_core::parse_int;
///
/// assert_eq!(parse_int("300"), Some(300));
/// assert_eq!(parse_int(" 12 weeks"), Some(12));
/// assert_eq!(parse_int("3.7"), Some(3));
/// assert_eq!(parse_int("-2"), Some(-2));
/// assert_eq!(parse_int("0x1A"), Some(26));
/// assert_eq!(parse_int("abc"), None);
/// assert_eq!(parse_int(""), None);
/// ```
pub fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen_digit = true;
        let digit = i64::from(digit);
        // Accumulate toward the sign so i64::MIN stays representable.
        value = if negative {
            value.saturating_mul(i64::from(radix)).saturating_sub(digit)
        } else {
            value.saturating_mul(i64::from(radix)).saturating_add(digit)
        };
    }

    seen_digit.then_some(value)
}

/// Parses the leading integer of `s`, falling back to [`PARSE_DEFAULT`].
pub fn parse_int_or_default(s: &str) -> i64 {
    parse_int(s).unwrap_or_else(|| {
        tracing::trace!(input = %s, "no leading integer, using default");
        PARSE_DEFAULT
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // parse_int tests
    // =========================================================================

    #[test]
    fn parse_int_reads_plain_digits() {
        assert_eq!(parse_int("52"), Some(52));
        assert_eq!(parse_int("0"), Some(0));
    }

    #[test]
    fn parse_int_skips_surrounding_whitespace() {
        assert_eq!(parse_int("  7  "), Some(7));
        assert_eq!(parse_int("\t4\n"), Some(4));
    }

    #[test]
    fn parse_int_stops_at_first_non_digit() {
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("3.99"), Some(3));
        assert_eq!(parse_int("1,000"), Some(1));
    }

    #[test]
    fn parse_int_honours_sign() {
        assert_eq!(parse_int("-5"), Some(-5));
        assert_eq!(parse_int("+5"), Some(5));
    }

    #[test]
    fn parse_int_reads_hex_prefix() {
        assert_eq!(parse_int("0x10"), Some(16));
        assert_eq!(parse_int("-0Xff"), Some(-255));
    }

    #[test]
    fn parse_int_returns_none_without_digits() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("   "), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int(".5"), None);
        assert_eq!(parse_int("$300"), None);
    }

    #[test]
    fn parse_int_saturates_large_values() {
        assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int("-99999999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn parse_int_handles_multibyte_input() {
        assert_eq!(parse_int("５"), None);
        assert_eq!(parse_int("4€"), Some(4));
    }

    // =========================================================================
    // parse_int_or_default tests
    // =========================================================================

    #[test]
    fn parse_int_or_default_falls_back_to_non_positive() {
        assert_eq!(parse_int_or_default("none"), PARSE_DEFAULT);
        assert_eq!(parse_int_or_default(""), PARSE_DEFAULT);
    }

    #[test]
    fn parse_int_or_default_keeps_parsed_value() {
        assert_eq!(parse_int_or_default("300"), 300);
        assert_eq!(parse_int_or_default("-1"), -1);
    }
}
