/// Lenient number parsing for form text.
///
/// Accepts a comma as decimal separator and ignores anything that is not a
/// digit or a period (currency symbols, spaces, signs). Blank input counts as
/// zero. Ambiguous input such as `"1.2.3"` yields `NaN` so the problem shows up
/// in every dependent result instead of aborting the calculation.
pub fn parse_number(raw: &str) -> f64 {
    let normalized = raw.trim().replacen(',', ".", 1);
    let cleaned: String = normalized
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();

    if cleaned.is_empty() {
        return 0.0;
    }

    if cleaned.matches('.').count() > 1 {
        return f64::NAN;
    }

    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}
