use super::leading_number;

/// Parses text such as `"42%"` or `"12.5"`, clamped to `[0, 100]`. Unparsable text is zero.
pub fn parse_percentage(raw: &str) -> f64 {
    let stripped = raw.replace('%', "");
    leading_number(&stripped)
        .filter(|n| n.is_finite())
        .map(|n| n.clamp(0.0, 100.0))
        .unwrap_or(0.0)
}

/// Displays a stored percentage, e.g. `12.5` becomes `"12.5%"`.
pub fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}%", value as i64)
    } else {
        format!("{}%", value)
    }
}
