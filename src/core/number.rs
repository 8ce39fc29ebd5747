//! Conversions between display text and numeric operands.
//!
//! The display string is the source of truth for operands, so parsing has to
//! tolerate partial input such as `"5."` or `"-"`, and formatting has to
//! produce text that parses back to the same value.

/// Fractional digits kept by `calculate()` results.
pub const DEFAULT_RESULT_PRECISION: u32 = 6;

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. Text without a numeric prefix (including
/// the error marker) yields `NaN`.
#[must_use]
pub fn parse_display_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let negative = bytes.first() == Some(&b'-');
    let mut cursor = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if trimmed[cursor..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = cursor;
    let int_len = leading_digit_count(&bytes[cursor..]);
    cursor += int_len;
    let int_digits = &trimmed[int_start..cursor];

    let mut frac_digits = "";
    if bytes.get(cursor) == Some(&b'.') {
        let frac_start = cursor + 1;
        let frac_len = leading_digit_count(&bytes[frac_start..]);
        if int_len > 0 || frac_len > 0 {
            frac_digits = &trimmed[frac_start..frac_start + frac_len];
            cursor = frac_start + frac_len;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return f64::NAN;
    }

    let mut exponent = "";
    if matches!(bytes.get(cursor), Some(b'e' | b'E')) {
        let exp_start = cursor + 1;
        let sign_len = usize::from(matches!(bytes.get(exp_start), Some(b'+' | b'-')));
        let exp_len = leading_digit_count(&bytes[exp_start + sign_len..]);
        if exp_len > 0 {
            exponent = &trimmed[exp_start..exp_start + sign_len + exp_len];
        }
    }

    let canonical = format!(
        "{sign}{int}.{frac}e{exp}",
        sign = if negative { "-" } else { "" },
        int = if int_digits.is_empty() { "0" } else { int_digits },
        frac = if frac_digits.is_empty() { "0" } else { frac_digits },
        exp = if exponent.is_empty() { "0" } else { exponent },
    );
    canonical.parse::<f64>().unwrap_or(f64::NAN)
}

fn leading_digit_count(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

/// Formats a value as display text using the shortest round-trip digits.
///
/// Magnitudes at or above `1e21` and non-zero magnitudes below `1e-6` switch
/// to exponent notation with an explicit exponent sign (`1e+21`, `1.5e-7`).
/// Negative zero renders as `"0"`.
#[must_use]
pub fn format_display_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }

    format!("{value}")
}

/// Rounds to the nearest integer, sending exact halves toward positive infinity.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if rounded - value == -0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Rounds `value` to `digits` fractional digits by scaling, rounding and rescaling.
///
/// Values too large to scale are returned unchanged; they carry no
/// fractional digits at that magnitude anyway.
#[must_use]
pub fn round_to_precision(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    round_half_up(scaled) / scale
}

/// Serde field adapter that keeps non-finite values intact in JSON.
///
/// Finite values stay plain numbers. `NaN` and the infinities are written as
/// their display text, which JSON numbers cannot carry.
pub(crate) mod display_number_serde {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{format_display_number, parse_display_number};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Encoded {
        Number(f64),
        Text(String),
    }

    pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            Encoded::Number(*value)
        } else {
            Encoded::Text(format_display_number(*value))
        }
        .serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Encoded::deserialize(deserializer)? {
            Encoded::Number(value) => Ok(value),
            Encoded::Text(text) => match text.as_str() {
                "NaN" | "Infinity" | "-Infinity" => Ok(parse_display_number(&text)),
                _ => Err(D::Error::custom(format!(
                    "expected a number, `NaN` or `Infinity`, got `{text}`"
                ))),
            },
        }
    }
}
