use super::leading_number;

const CURRENCY_SYMBOL: &str = "R$";
const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Extracts the amount from user text such as `"R$ 1.234,50"` or `"1234,5"`.
///
/// Everything except digits and commas is discarded, the first comma becomes the
/// decimal point, and unparsable or overflowing input counts as zero.
pub fn parse_currency(raw: &str) -> f64 {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();
    let normalized = kept.replacen(',', ".", 1);
    leading_number(&normalized)
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Formats an amount as Brazilian reais, e.g. `1234.5` becomes `"R$ 1.234,50"`.
/// The separator after the symbol is a no-break space.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!(
        "{}{}\u{a0}{}{}{}",
        sign, CURRENCY_SYMBOL, grouped, DECIMAL_SEPARATOR, frac_part
    )
}
