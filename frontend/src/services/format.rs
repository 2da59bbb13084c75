//! Indonesian display formatting. Cosmetic only: nothing formatted here ever
//! feeds back into a filter value or a request body.

use chrono::{DateTime, Datelike, NaiveDate, Timelike};

use super::calendar::parse_iso;

const MONTHS_LONG: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun",
    "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

pub fn month_long(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTHS_LONG.get(i as usize))
        .copied()
        .unwrap_or("Januari")
}

pub fn month_short(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTHS_SHORT.get(i as usize))
        .copied()
        .unwrap_or("Jan")
}

/// Whole-rupiah currency: `Rp 1.250.000`. No decimal digits, dot as the
/// thousands separator.
pub fn rupiah(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Compact axis labels: `150 rb`, `1,5 jt`, `2 M`.
pub fn rupiah_compact(amount: f64) -> String {
    let abs = amount.abs();
    let (scaled, suffix) = if abs >= 1_000_000_000.0 {
        (amount / 1_000_000_000.0, " M")
    } else if abs >= 1_000_000.0 {
        (amount / 1_000_000.0, " jt")
    } else if abs >= 1_000.0 {
        (amount / 1_000.0, " rb")
    } else {
        (amount, "")
    };

    let text = if (scaled - scaled.trunc()).abs() < 0.05 {
        format!("{}", scaled.trunc() as i64)
    } else {
        // Indonesian decimal comma
        format!("{:.1}", scaled).replace('.', ",")
    };
    format!("{}{}", text, suffix)
}

/// `2025-03-15` → `15 Mar 2025` for the date-picker trigger. Anything
/// unparseable renders as-is rather than erroring.
pub fn display_date(iso: &str) -> String {
    match parse_iso(iso) {
        Some(date) => format!("{} {} {}", date.day(), month_short(date.month()), date.year()),
        None => iso.to_string(),
    }
}

/// RFC 3339 timestamp → `15 Maret 2025 14.30` for the transactions table.
pub fn long_datetime(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => format!(
            "{} {} {} {:02}.{:02}",
            dt.day(),
            month_long(dt.month()),
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        Err(_) => rfc3339.to_string(),
    }
}

/// `2025-03-15` → `15 Mar` for the chart x-axis.
pub fn axis_date(date: NaiveDate) -> String {
    format!("{} {}", date.day(), month_short(date.month()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupiah_groups_thousands_with_dots() {
        assert_eq!(rupiah(0.0), "Rp 0");
        assert_eq!(rupiah(950.0), "Rp 950");
        assert_eq!(rupiah(150_000.0), "Rp 150.000");
        assert_eq!(rupiah(1_250_000.0), "Rp 1.250.000");
        assert_eq!(rupiah(-75_500.0), "-Rp 75.500");
    }

    #[test]
    fn rupiah_rounds_fractions_away() {
        assert_eq!(rupiah(1999.6), "Rp 2.000");
    }

    #[test]
    fn compact_uses_indonesian_suffixes() {
        assert_eq!(rupiah_compact(500.0), "500");
        assert_eq!(rupiah_compact(150_000.0), "150 rb");
        assert_eq!(rupiah_compact(1_500_000.0), "1,5 jt");
        assert_eq!(rupiah_compact(2_000_000_000.0), "2 M");
    }

    #[test]
    fn display_date_uses_short_month() {
        assert_eq!(display_date("2025-03-15"), "15 Mar 2025");
        assert_eq!(display_date("2025-12-01"), "1 Des 2025");
    }

    #[test]
    fn display_date_passes_garbage_through() {
        assert_eq!(display_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn long_datetime_formats_rfc3339() {
        assert_eq!(
            long_datetime("2025-03-15T14:30:00+07:00"),
            "15 Maret 2025 14.30"
        );
    }
}
