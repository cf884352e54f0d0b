//! Display formatting for stat cards, tables and charts.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Compact count: `1250` → `1.3K`, `1500000` → `1.5M`, `999` → `999`.
/// Rounds half up to one decimal; a K value that rounds to 1000.0 is shown in M.
pub fn format_number(value: u64) -> String {
    if value < 1_000 {
        return value.to_string();
    }
    let tenths_k = tenths(value, 100);
    if tenths_k < 10_000 {
        return format!("{}.{}K", tenths_k / 10, tenths_k % 10);
    }
    let tenths_m = tenths(value, 100_000);
    format!("{}.{}M", tenths_m / 10, tenths_m % 10)
}

// `value / unit`, rounded half up, without overflowing near `u64::MAX`.
fn tenths(value: u64, unit: u64) -> u64 {
    value / unit + u64::from(value % unit >= unit / 2)
}

/// `1234.5` → `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// `12.5` → `12.5%`, `12.0` → `12%`.
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}%", rounded as i64)
    } else {
        format!("{:.1}%", rounded)
    }
}

/// RFC 3339 timestamp → `Jan 5, 2024`; unparseable input is returned as-is.
pub fn format_date(raw: &str) -> String {
    let Ok(ts) = OffsetDateTime::parse(raw.trim(), &Rfc3339) else {
        return raw.to_string();
    };
    let month = match ts.month() {
        time::Month::January => "Jan",
        time::Month::February => "Feb",
        time::Month::March => "Mar",
        time::Month::April => "Apr",
        time::Month::May => "May",
        time::Month::June => "Jun",
        time::Month::July => "Jul",
        time::Month::August => "Aug",
        time::Month::September => "Sep",
        time::Month::October => "Oct",
        time::Month::November => "Nov",
        time::Month::December => "Dec",
    };
    format!("{} {}, {}", month, ts.day(), ts.year())
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
