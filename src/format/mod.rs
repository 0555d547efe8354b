//! Text conversions applied when a currency or percentage input loses focus, plus the
//! display rules of the review screen.

mod currency;
mod percentage;
mod review;

pub use currency::{format_currency, parse_currency};
pub use percentage::{format_percentage, parse_percentage};
pub use review::{NOT_PROVIDED, ReviewEntry, ReviewFormatter, ReviewSection};

use crate::schema::FieldKind;

/// Normalizes raw text typed into a currency or percentage input.
///
/// Returns the value to store and the string to display, or `None` for kinds that are
/// stored as typed.
pub fn normalize(kind: FieldKind, raw: &str) -> Option<(f64, String)> {
    match kind {
        FieldKind::Currency => {
            let amount = parse_currency(raw);
            Some((amount, format_currency(amount)))
        }
        FieldKind::Percentage => {
            let pct = parse_percentage(raw);
            Some((pct, format_percentage(pct)))
        }
        _ => None,
    }
}

/// Parses the longest leading decimal number, the way a lenient float parser does.
/// `"12.5abc"` yields `12.5`; text without a leading digit yields `None`.
pub(crate) fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }
    text[..end].parse::<f64>().ok()
}
