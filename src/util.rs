// Utility helpers for parsing and number formatting.
//
// The CSV inputs carry everything as text; these helpers turn optional cells
// into typed values so the rest of the code can assume clean data.
use num_format::{Locale, ToFormattedString};

/// Numeric cell as `f64`. Thousands separators and scientific notation
/// (`1.2e+06`) are accepted; `NaN`, `inf` and other non-finite or textual
/// markers such as `NA` count as missing.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim().replace(',', "");
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Years sometimes arrive as `1998.0` when the exporting tool widened the
/// column to float; accept those as long as there is no fractional part.
pub fn parse_year_safe(s: Option<&str>) -> Option<i32> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(y) = s.parse::<i32>() {
        return Some(y);
    }
    let f = s.parse::<f64>().ok()?;
    if f.fract() == 0.0 && f.is_finite() {
        Some(f as i32)
    } else {
        None
    }
}

/// Trimmed, non-empty text or `None`.
pub fn clean_text(s: Option<String>) -> Option<String> {
    let s = s?.trim().to_string();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

pub fn format_number(n: f64, decimals: usize) -> String {
    let neg = n.is_sign_negative() && n != 0.0;
    let s = format!("{:.*}", decimals, n.abs());
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        res.push('.');
        res.push_str(frac);
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

/// Row counts for console messages, e.g. `9,855`.
pub fn format_count(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}
