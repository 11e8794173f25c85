//! Number formatting for summary text.

use crate::models::CellValue;

/// Format a float for the summary text.
///
/// NaN and infinities read `"N/A"`; values of 1000 and above are
/// thousands-grouped with no decimals; anything smaller gets two decimals.
pub fn format_number(x: f64) -> String {
    if !x.is_finite() {
        return "N/A".to_string();
    }
    if x >= 1000.0 {
        group_thousands(&format!("{x:.0}"))
    } else {
        format!("{x:.2}")
    }
}

/// Thousands-grouped integer, e.g. `1234567` -> `"1,234,567"`.
pub fn format_int(x: i64) -> String {
    group_thousands(&x.to_string())
}

/// Format a loosely typed value: integers and floats as above, anything else
/// as its raw text.
pub fn format_value(value: &CellValue) -> String {
    match value {
        CellValue::Int(v) => format_int(*v),
        CellValue::Float(v) => format_number(*v),
        CellValue::Empty => "N/A".to_string(),
        other => match other.as_f64() {
            Some(v) => format_number(v),
            None => other.to_string(),
        },
    }
}

fn group_thousands(digits: &str) -> String {
    let (sign, body) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    if !body.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }

    let mut out = String::with_capacity(body.len() + body.len() / 3 + 1);
    for (i, ch) in body.chars().enumerate() {
        if i > 0 && (body.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{sign}{out}")
}
