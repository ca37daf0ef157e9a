// src/core/sanitize.rs

use std::cmp::Ordering;

use crate::config::consts::{HOURLY_CUTOFF, HOURS_PER_YEAR};

/// Drop `$` and `,` (currency formatting) and surrounding whitespace.
pub fn strip_currency(s: &str) -> String {
    s.chars().filter(|c| *c != '$' && *c != ',').collect::<String>().trim().to_string()
}

/// Lenient float parse: reads the longest numeric prefix (`"12.5abc"` → 12.5,
/// `"1.2e5"` → 120000).
/// Nothing numeric → None.
pub fn parse_number_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) { end = 1; }
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit { return None; }

    // optional exponent, only when digits follow (`1.2e5`, not `1.2e`)
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) { exp += 1; }
        let digits = bytes[exp.min(bytes.len())..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 { end = exp + digits; }
    }
    s[..end].parse::<f64>().ok()
}

/// Raw wage cell → annual whole dollars.
/// Values under the hourly cutoff are hourly rates (× 2080). Missing,
/// unparsable or negative → 0.
pub fn parse_wage(raw: &str) -> u32 {
    let num = parse_number_prefix(&strip_currency(raw)).unwrap_or(0.0);
    if !num.is_finite() || num <= 0.0 { return 0; }
    let annual = if num < HOURLY_CUTOFF { num * HOURS_PER_YEAR } else { num };
    annual.round().min(u32::MAX as f64) as u32
}

/// First `DDDD-DD` run in a file name (`OFLC_Wages_2025-26.zip` → `2025-26`).
pub fn year_label(file_name: &str) -> Option<String> {
    let b = file_name.as_bytes();
    if b.len() < 7 { return None; }
    (0..=b.len() - 7).find_map(|i| {
        let w = &b[i..i + 7];
        let ok = w[..4].iter().all(u8::is_ascii_digit)
            && w[4] == b'-'
            && w[5..].iter().all(u8::is_ascii_digit);
        ok.then(|| s!(&file_name[i..i + 7]))
    })
}

/// `15-1243.01` → `15-1243`. Codes without a two-digit dot suffix are returned as-is.
pub fn onet_base(code: &str) -> &str {
    let b = code.as_bytes();
    let n = b.len();
    if n >= 3 && b[n - 3] == b'.' && b[n - 2].is_ascii_digit() && b[n - 1].is_ascii_digit() {
        &code[..n - 3]
    } else {
        code
    }
}

/// Keep digits only and re-render with thousands separators (`"120000x"` → `"120,000"`).
pub fn format_salary_input(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        // "0" / "000" still shows a zero so the user sees their input
        return if value.contains('0') { s!("0") } else { s!() };
    }
    group_thousands(digits)
}

/// `$1,234,567` (whole dollars, half-up).
pub fn format_currency(amount: f64) -> String {
    let neg = amount < 0.0;
    let whole = amount.abs().round() as u64;
    let body = group_thousands(&whole.to_string());
    if neg { join!("-$", &body) } else { join!("$", &body) }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out
}

/// Display-order comparison for titles and area names: case-insensitive
/// first, then exact, so "apple" and "Apple" stay adjacent but ordered.
pub fn collate(a: &str, b: &str) -> Ordering {
    let la = a.chars().flat_map(char::to_lowercase);
    let lb = b.chars().flat_map(char::to_lowercase);
    la.cmp(lb).then_with(|| a.cmp(b))
}
