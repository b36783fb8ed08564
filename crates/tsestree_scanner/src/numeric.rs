//! Numeric literal evaluation.

/// Evaluate the text of a numeric literal token.
///
/// Handles `0x`/`0b`/`0o` prefixes, legacy octal (`017`), decimals with a
/// leading zero (`019`), numeric separators and exponents. Returns NaN for
/// text that is not a numeric literal.
pub fn parse_numeric_literal(text: &str) -> f64 {
    let cleaned: String;
    let text = if text.contains('_') {
        cleaned = text.replace('_', "");
        cleaned.as_str()
    } else {
        text
    };

    let bytes = text.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return parse_radix(&text[2..], 16),
            b'b' | b'B' => return parse_radix(&text[2..], 2),
            b'o' | b'O' => return parse_radix(&text[2..], 8),
            b'0'..=b'7' if bytes.iter().all(|b| matches!(b, b'0'..=b'7')) => {
                return parse_radix(&text[1..], 8);
            }
            _ => {}
        }
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut value = 0f64;
    for ch in digits.chars() {
        match ch.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    value
}

/// The `bigint` string of a BigInt literal: its text without the `n` suffix
/// and separators.
pub fn parse_bigint_literal(text: &str) -> String {
    text.strip_suffix('n').unwrap_or(text).replace('_', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_numeric_literal("42"), 42.0);
        assert_eq!(parse_numeric_literal("1.5e3"), 1500.0);
        assert_eq!(parse_numeric_literal(".5"), 0.5);
        assert_eq!(parse_numeric_literal("5."), 5.0);
        assert_eq!(parse_numeric_literal("1_000_000"), 1_000_000.0);
    }

    #[test]
    fn test_radix_prefixes() {
        assert_eq!(parse_numeric_literal("0xFF"), 255.0);
        assert_eq!(parse_numeric_literal("0b1010"), 10.0);
        assert_eq!(parse_numeric_literal("0O17"), 15.0);
    }

    #[test]
    fn test_legacy_octal_and_leading_zero() {
        assert_eq!(parse_numeric_literal("017"), 15.0);
        assert_eq!(parse_numeric_literal("019"), 19.0);
        assert_eq!(parse_numeric_literal("0"), 0.0);
        assert_eq!(parse_numeric_literal("00"), 0.0);
    }

    #[test]
    fn test_bigint() {
        assert_eq!(parse_bigint_literal("123n"), "123");
        assert_eq!(parse_bigint_literal("0xF_Fn"), "0xFF");
    }
}
