//! Display formatting for chart values.
//!
//! Fixed-point output matches the browser's `Number.prototype.toFixed(2)`:
//! the exact binary value is rounded half away from zero, so `1.005` (stored
//! as `1.00499…`) prints `1.00` and `0.125` prints `0.13`. Negative values
//! that round to zero keep their sign (`-0.00`), and magnitudes of `1e21` or
//! more fall back to the plain number text (`1e+21`).

use rust_decimal::{Decimal, RoundingStrategy};

const EXPONENT_FORM_THRESHOLD: f64 = 1e21;

/// Formats `value` with exactly two fractional digits.
#[must_use]
pub fn format_fixed2(value: f64) -> String {
    if !value.is_finite() || value.abs() >= EXPONENT_FORM_THRESHOLD {
        return format_js_number(value);
    }
    if value == 0.0 {
        return "0.00".to_owned();
    }
    let text = match Decimal::from_f64_retain(value) {
        Some(decimal) => {
            let mut rounded =
                decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        None => format!("{value:.2}"),
    };
    if value < 0.0 && !text.starts_with('-') {
        return format!("-{text}");
    }
    text
}

/// Shortest round-trip text of `value`, laid out like JavaScript's
/// `String(number)`: plain digits for decimal exponents in `-7..21`,
/// `d.ddde±x` otherwise.
#[must_use]
pub fn format_js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits as `d.ddde<exp>`.
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digit_count = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    let body = if digit_count <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - digit_count) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{whole}.{fraction}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let exponent_sign = if point - 1 < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        let magnitude = (point - 1).abs();
        if rest.is_empty() {
            format!("{lead}e{exponent_sign}{magnitude}")
        } else {
            format!("{lead}.{rest}e{exponent_sign}{magnitude}")
        }
    };
    format!("{sign}{body}")
}

/// `"$"` followed by the two-decimal value, e.g. `1234.5` -> `"$1234.50"`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    format!("${}", format_fixed2(value))
}

/// Two-decimal value followed by `"%"`, e.g. `42` -> `"42.00%"`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{}%", format_fixed2(value))
}

/// Plain number text followed by `"%"`, e.g. `50` -> `"50%"`, `1e-7` -> `"1e-7%"`.
///
/// Used for percentage axis ticks, which are not padded to two decimals.
#[must_use]
pub fn format_percentage_tick(value: f64) -> String {
    format!("{}%", format_js_number(value))
}
