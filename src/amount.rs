//! Sanitization of the pending-amount text input.
//!
//! Balances are kept to two decimal places; letting more digits through
//! the input makes the computed new balance drift, so everything beyond
//! the second fractional digit is dropped at the input boundary.

/// Reduce raw user input to a non-negative decimal string: digits and a
/// single `.` only, at most two fractional digits, no leading-zero run in
/// the integer part. Empty or all-filtered input becomes `"0"`.
///
/// Idempotent: sanitizing a sanitized string is a no-op.
pub fn sanitize_amount_input(raw: &str) -> String {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    // Keep only the first two dot-delimited segments.
    let (int_part, frac_part) = match filtered.split_once('.') {
        Some((int, rest)) => {
            let frac = rest.split('.').next().unwrap_or("");
            (int, Some(&frac[..frac.len().min(2)]))
        }
        None => (filtered.as_str(), None),
    };

    let int_part = {
        let trimmed = int_part.trim_start_matches('0');
        if trimmed.is_empty() { "0" } else { trimmed }
    };

    match frac_part {
        Some(frac) => format!("{int_part}.{frac}"),
        None => int_part.to_string(),
    }
}

/// Numeric value of a sanitized pending string. Mid-typing input such as
/// `"0."` still parses; anything unparseable counts as zero, which the
/// submit validation then rejects.
pub fn parse_amount(s: &str) -> f64 {
    s.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_foreign_characters() {
        assert_eq!(sanitize_amount_input("12a,3 ₽"), "123");
        assert_eq!(sanitize_amount_input("abc"), "0");
        assert_eq!(sanitize_amount_input(""), "0");
    }

    #[test]
    fn collapses_leading_zeros() {
        assert_eq!(sanitize_amount_input("00012.3456"), "12.34");
        assert_eq!(sanitize_amount_input("007"), "7");
        assert_eq!(sanitize_amount_input("000"), "0");
        assert_eq!(sanitize_amount_input("0.50"), "0.50");
    }

    #[test]
    fn truncates_fraction_to_two_digits() {
        assert_eq!(sanitize_amount_input("1.999"), "1.99");
        assert_eq!(sanitize_amount_input("1.9"), "1.9");
        assert_eq!(sanitize_amount_input("1."), "1.");
    }

    #[test]
    fn keeps_a_single_dot() {
        assert_eq!(sanitize_amount_input("1.2.3"), "1.2");
        assert_eq!(sanitize_amount_input("..5"), "0.");
        assert_eq!(sanitize_amount_input(".5"), "0.5");
    }

    #[test]
    fn is_idempotent() {
        let raws = [
            "", "0", "00012.3456", "1.2.3", ".5", "12.", "abc", "007",
            "9999999.99", "0.00", "1,5", "  42  ",
        ];
        for raw in raws {
            let once = sanitize_amount_input(raw);
            assert_eq!(sanitize_amount_input(&once), once, "raw input {raw:?}");
        }
    }

    #[test]
    fn parses_mid_typing_input_as_zero_or_value() {
        assert_eq!(parse_amount("0"), 0.0);
        assert_eq!(parse_amount("12.34"), 12.34);
        assert_eq!(parse_amount("12."), 12.0);
        assert_eq!(parse_amount("0.5"), 0.5);
    }
}
