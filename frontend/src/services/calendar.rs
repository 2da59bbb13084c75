//! Pure calendar math for the date picker.
//!
//! Everything here is deterministic given its inputs. The wall clock is read
//! in exactly one place (`today`), so the grid generator and the day
//! classification can be unit tested natively.

use chrono::{Datelike, Duration, NaiveDate};

/// The month currently shown in the popover grid, independent of the
/// selected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMonth {
    pub year: i32,
    /// 1-based, 1 = January
    pub month: u32,
}

impl ViewMonth {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// One month back, borrowing from the year at January.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// One month forward, carrying into the year at December.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // Month is validated at construction sites; fall back to January
        // rather than panicking on a corrupt value.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).expect("year in range"))
    }
}

/// One square of the popover grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the leading/trailing spillover days of adjacent months.
    pub in_view_month: bool,
}

/// Builds the 6-week, Sunday-first grid for `view`: exactly 42 cells in
/// strictly ascending date order, leading cells taken from the previous
/// month and trailing cells from the next.
pub fn generate_grid(view: ViewMonth) -> Vec<DayCell> {
    let first = view.first_day();
    let lead = first.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(lead);

    (0..42)
        .map(|offset| {
            let date = start + Duration::days(offset);
            DayCell {
                date,
                in_view_month: date.year() == view.year && date.month() == view.month,
            }
        })
        .collect()
}

/// Strict `YYYY-MM-DD` parse. Anything else (including out-of-range days)
/// reads as "no date".
pub fn parse_iso(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Zero-padded `YYYY-MM-DD` built from the date's own fields. The emitted
/// value must never round-trip through a timezone-aware formatter, which can
/// shift the calendar day across a UTC/local boundary.
pub fn format_iso(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Render state of one day cell. `Disabled` wins over `Selected` wins over
/// `Today`; a disabled day is never clickable even when it is also today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Disabled,
    Selected,
    Today,
    Plain,
}

pub fn classify(
    cell: &DayCell,
    selected: Option<NaiveDate>,
    min: Option<NaiveDate>,
    today: NaiveDate,
) -> DayState {
    if is_disabled(cell.date, min) {
        DayState::Disabled
    } else if selected == Some(cell.date) {
        DayState::Selected
    } else if cell.date == today {
        DayState::Today
    } else {
        DayState::Plain
    }
}

/// A day strictly before the minimum bound is not selectable. Both sides
/// are plain calendar dates, so no midnight truncation is needed here.
pub fn is_disabled(date: NaiveDate, min: Option<NaiveDate>) -> bool {
    matches!(min, Some(bound) if date < bound)
}

/// Current calendar date. Reads the browser clock on wasm; host builds
/// (tests) use the system clock.
#[cfg(target_arch = "wasm32")]
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() as u32 + 1,
        now.get_date() as u32,
    )
    .expect("browser clock yields a valid date")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_grid_invariants(view: ViewMonth) {
        let grid = generate_grid(view);
        assert_eq!(grid.len(), 42, "{:?}", view);
        for pair in grid.windows(2) {
            assert_eq!(
                pair[1].date - pair[0].date,
                Duration::days(1),
                "grid must be strictly ascending with no gaps for {:?}",
                view
            );
        }
        assert_eq!(
            grid[0].date.weekday().num_days_from_sunday(),
            0,
            "grid starts on a Sunday"
        );
    }

    #[test]
    fn grid_is_always_42_ordered_cells() {
        for view in [
            ViewMonth { year: 2024, month: 1 },
            ViewMonth { year: 2024, month: 2 },
            ViewMonth { year: 2023, month: 2 },
            ViewMonth { year: 2024, month: 12 },
            ViewMonth { year: 2025, month: 6 },
            ViewMonth { year: 2026, month: 2 },
            ViewMonth { year: 2027, month: 2 },
        ] {
            assert_grid_invariants(view);
        }
    }

    #[test]
    fn leap_february_has_29_view_days() {
        let grid = generate_grid(ViewMonth { year: 2024, month: 2 });
        let current: Vec<u32> = grid
            .iter()
            .filter(|c| c.in_view_month)
            .map(|c| c.date.day())
            .collect();
        assert_eq!(current.len(), 29);
        assert_eq!(current.first(), Some(&1));
        assert_eq!(current.last(), Some(&29));
    }

    #[test]
    fn non_leap_february_has_28_view_days() {
        let grid = generate_grid(ViewMonth { year: 2023, month: 2 });
        assert_eq!(grid.iter().filter(|c| c.in_view_month).count(), 28);
    }

    #[test]
    fn leading_cells_count_backward_from_previous_month() {
        // March 2025 starts on a Saturday, so six February days lead the grid.
        let grid = generate_grid(ViewMonth { year: 2025, month: 3 });
        assert_eq!(grid[0].date, date(2025, 2, 23));
        assert!(!grid[0].in_view_month);
        assert_eq!(grid[6].date, date(2025, 3, 1));
        assert!(grid[6].in_view_month);
    }

    #[test]
    fn trailing_cells_spill_into_next_month() {
        let grid = generate_grid(ViewMonth { year: 2025, month: 3 });
        let last = grid.last().unwrap();
        assert_eq!(last.date.month(), 4);
        assert!(!last.in_view_month);
    }

    #[test]
    fn prev_borrows_across_january() {
        let view = ViewMonth { year: 2025, month: 1 };
        assert_eq!(view.prev(), ViewMonth { year: 2024, month: 12 });
    }

    #[test]
    fn next_carries_across_december() {
        let view = ViewMonth { year: 2024, month: 12 };
        assert_eq!(view.next(), ViewMonth { year: 2025, month: 1 });
    }

    #[test]
    fn month_step_ignores_day_of_month() {
        // Stepping from a January view lands on February, never March,
        // regardless of which day was selected.
        let view = ViewMonth::containing(date(2025, 1, 31));
        assert_eq!(view.next(), ViewMonth { year: 2025, month: 2 });
    }

    #[test]
    fn iso_round_trip_has_no_drift() {
        for raw in ["2025-01-01", "2025-12-31", "2024-02-29", "2025-03-15"] {
            let parsed = parse_iso(raw).unwrap();
            assert_eq!(format_iso(parsed), raw);
        }
    }

    #[test]
    fn format_iso_zero_pads() {
        assert_eq!(format_iso(date(987, 3, 5)), "0987-03-05");
    }

    #[test]
    fn malformed_input_parses_as_no_date() {
        for raw in ["", "garbage", "2025-13-01", "2025-02-30", "15/03/2025"] {
            assert_eq!(parse_iso(raw), None, "{:?}", raw);
        }
    }

    #[test]
    fn day_before_minimum_is_disabled() {
        let min = Some(date(2025, 3, 10));
        assert!(is_disabled(date(2025, 3, 9), min));
        assert!(!is_disabled(date(2025, 3, 10), min));
        assert!(!is_disabled(date(2025, 3, 11), min));
        assert!(!is_disabled(date(2025, 3, 9), None));
    }

    #[test]
    fn disabled_overrides_selected_and_today() {
        let cell = DayCell { date: date(2025, 3, 9), in_view_month: true };
        let state = classify(
            &cell,
            Some(date(2025, 3, 9)),
            Some(date(2025, 3, 10)),
            date(2025, 3, 9),
        );
        assert_eq!(state, DayState::Disabled);
    }

    #[test]
    fn selected_overrides_today() {
        let cell = DayCell { date: date(2025, 3, 15), in_view_month: true };
        let state = classify(&cell, Some(date(2025, 3, 15)), None, date(2025, 3, 15));
        assert_eq!(state, DayState::Selected);

        let state = classify(&cell, None, None, date(2025, 3, 15));
        assert_eq!(state, DayState::Today);

        let state = classify(&cell, None, None, date(2025, 3, 16));
        assert_eq!(state, DayState::Plain);
    }
}
