//! Operand text <-> f64
//!
//! Operands live as display text. Parsing reads the longest numeric prefix
//! and yields NaN when there is none, so a malformed operand poisons the
//! arithmetic downstream instead of failing. Formatting produces the
//! shortest text that parses back to the same value.

/// Magnitude at and above which results switch to exponent notation
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitude below which non-zero results switch to exponent notation
const EXPONENT_LOWER: f64 = 1e-6;

const INFINITY_WORD: &str = "Infinity";

/// Parses the numeric prefix of an operand
///
/// Accepts an optional sign followed by `Infinity` or a decimal mantissa
/// with an optional exponent. Anything after the longest valid prefix is
/// ignored: `"12abc"` is 12, `"1e+2x"` is 100, `"0."` is 0. No valid
/// prefix yields NaN.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with(INFINITY_WORD) {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Formats a value as operand text
///
/// `NaN`, `Infinity` and `-Infinity` are spelled out, negative zero prints
/// as `0`, very large and very small magnitudes use exponent notation with
/// an explicit exponent sign (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            INFINITY_WORD.to_string()
        } else {
            format!("-{INFINITY_WORD}")
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return value.to_string();
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
