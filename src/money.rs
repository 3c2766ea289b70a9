// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Conversion between typed-in money strings and integer cents.

use once_cell::sync::Lazy;
use regex::Regex;

static STRICT_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.,]\d{2}$").expect("static regex"));

/// Render cents as `1,234.56`. A missing amount renders as `0.00`.
pub fn format_cents(cents: Option<i64>) -> String {
    let cents = cents.unwrap_or(0);
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, group_thousands(abs / 100), abs % 100)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse `12.34`, `12,34` or `12` into cents.
///
/// The fraction is scaled to two digits: `5.3` is 530 cents, extra digits past
/// the second are dropped. Anything other than digits and at most one
/// separator yields `None`.
pub fn parse_cents(text: &str) -> Option<i64> {
    let normalized = text.trim().replace(',', ".");
    let (whole, frac) = match normalized.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (normalized.as_str(), None),
    };
    if !is_digits(whole) {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let frac_cents = match frac {
        None => 0,
        Some(f) => {
            if !is_digits(f) {
                return None;
            }
            let mut two: String = f.chars().take(2).collect();
            while two.len() < 2 {
                two.push('0');
            }
            two.parse::<i64>().ok()?
        }
    };
    whole.checked_mul(100)?.checked_add(frac_cents)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Strict check used while typing: digits, one separator, exactly two digits.
pub fn is_valid_decimal(text: &str) -> bool {
    STRICT_DECIMAL.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_missing_render_the_same() {
        assert_eq!(format_cents(Some(0)), "0.00");
        assert_eq!(format_cents(None), "0.00");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_cents(Some(5)), "0.05");
        assert_eq!(format_cents(Some(50000)), "500.00");
        assert_eq!(format_cents(Some(123456789)), "1,234,567.89");
        assert_eq!(format_cents(Some(100000)), "1,000.00");
        assert_eq!(format_cents(Some(-123456)), "-1,234.56");
    }

    #[test]
    fn parses_both_separators() {
        assert_eq!(parse_cents("11,11"), Some(1111));
        assert_eq!(parse_cents("11.11"), Some(1111));
        assert_eq!(parse_cents(" 7 "), Some(700));
    }

    #[test]
    fn scales_short_fraction() {
        assert_eq!(parse_cents("5.3"), Some(530));
        assert_eq!(parse_cents("5.305"), Some(530));
        assert_eq!(parse_cents("0.07"), Some(7));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_cents("abc"), None);
        assert_eq!(parse_cents("1.2.3"), None);
        assert_eq!(parse_cents("1,2.3"), None);
        assert_eq!(parse_cents("-1.00"), None);
        assert_eq!(parse_cents(".50"), None);
        assert_eq!(parse_cents("5."), None);
        assert_eq!(parse_cents(""), None);
        assert_eq!(parse_cents("99999999999999999999"), None);
    }

    #[test]
    fn parse_inverts_format_below_thousands() {
        for x in [0_i64, 1, 9, 10, 99, 100, 1234, 50000, 99999] {
            assert_eq!(parse_cents(&format_cents(Some(x))), Some(x), "x = {x}");
        }
    }

    #[test]
    fn grouped_output_is_not_parsed_back() {
        assert_eq!(format_cents(Some(100000)), "1,000.00");
        assert_eq!(parse_cents("1,000.00"), None);
        assert_eq!(parse_cents(&format_cents(Some(123456789))), None);
    }

    #[test]
    fn strict_field_check() {
        assert!(is_valid_decimal("11.11"));
        assert!(is_valid_decimal("11,11"));
        assert!(!is_valid_decimal("11.1"));
        assert!(!is_valid_decimal("11"));
        assert!(!is_valid_decimal("a.11"));
        assert!(!is_valid_decimal("11.111"));
    }
}
