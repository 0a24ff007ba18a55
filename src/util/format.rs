//! Display helpers for calculation results. Values that are not finite
//! (unparseable input, division by zero) render as [`PLACEHOLDER`].

pub const PLACEHOLDER: &str = "–";
pub const CURRENCY_SYMBOL: &str = "€";

const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Formats `value` with `digits` decimals and German digit grouping,
/// e.g. `1234.5` -> `"1.234,50"`.
pub fn format_number(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let fixed = format!("{:.*}", digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut output = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    // No "-0,00" for values that round to zero.
    if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        output.push('-');
    }

    let len = int_part.len();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            output.push(GROUP_SEPARATOR);
        }
        output.push(ch);
    }

    if let Some(frac) = frac_part {
        output.push(DECIMAL_SEPARATOR);
        output.push_str(frac);
    }

    output
}

pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{} {CURRENCY_SYMBOL}", format_number(value, 2))
}

pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{value:.1}%")
}
