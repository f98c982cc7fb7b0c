//! Formatting utilities for dates, counters and other display values.

/// Format Unix timestamp as ISO date (YYYY-MM-DD).
///
/// Properly calculates year/month/day accounting for leap years.
pub fn format_date_iso(timestamp: u64) -> String {
    let days = timestamp / 86400;
    let mut year = 1970i64;
    let mut remaining_days = days as i64;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 1;
    for days_in_month in days_in_months.iter() {
        if remaining_days < *days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }

    let day = remaining_days + 1;
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Check if a year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Date part of an ISO 8601 timestamp (`2024-05-01T08:00:00Z` -> `2024-05-01`).
///
/// Strings too short to carry a date are returned as-is.
pub fn format_item_date(raw: &str) -> String {
    let raw = raw.trim();
    match raw.get(..10) {
        Some(date) if raw.len() > 10 => date.to_string(),
        _ => raw.to_string(),
    }
}

/// Compact download counter (e.g., "950", "1.2K", "3.4M").
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
