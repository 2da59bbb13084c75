//! Popover state machine for the date picker, kept free of DOM concerns so
//! every transition can be tested natively. The component feeds DOM events
//! in and forwards the returned emission to its `on_change` callback.

use chrono::NaiveDate;

use super::calendar::{format_iso, is_disabled, DayCell, ViewMonth};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerState {
    pub open: bool,
    pub view: ViewMonth,
}

impl PickerState {
    pub fn closed(view: ViewMonth) -> Self {
        Self { open: false, view }
    }
}

/// Inputs owned by the consumer: the controlled value and the minimum bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerContext {
    pub selected: Option<NaiveDate>,
    pub min: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// The trigger field was activated.
    ToggleTrigger,
    /// A pointer-down landed outside the control while open.
    OutsidePointerDown,
    /// A grid cell was clicked.
    DayClicked(DayCell),
    /// The "today" footer action, carrying the current date.
    TodayClicked(NaiveDate),
    /// The "cancel" footer action.
    Cancel,
    PrevMonth,
    NextMonth,
    /// Month dropdown in the popover header (1-based).
    SetMonth(u32),
    /// Year dropdown in the popover header.
    SetYear(i32),
    /// The clear (×) control on the trigger.
    Clear,
}

/// Applies one event. Returns the next state and, when a selection or clear
/// happened, the exact string to emit through `on_change`: a zero-padded
/// `YYYY-MM-DD`, or `""` for a cleared value.
pub fn step(
    state: PickerState,
    event: PickerEvent,
    ctx: &PickerContext,
) -> (PickerState, Option<String>) {
    match event {
        PickerEvent::ToggleTrigger => {
            if state.open {
                (PickerState { open: false, ..state }, None)
            } else {
                // Re-anchor the view on the selected month so reopening
                // never shows a stale month.
                let view = ctx
                    .selected
                    .map(ViewMonth::containing)
                    .unwrap_or(state.view);
                (PickerState { open: true, view }, None)
            }
        }
        PickerEvent::OutsidePointerDown | PickerEvent::Cancel => {
            (PickerState { open: false, ..state }, None)
        }
        PickerEvent::DayClicked(cell) => {
            if !state.open || !cell.in_view_month || is_disabled(cell.date, ctx.min) {
                (state, None)
            } else {
                (
                    PickerState { open: false, ..state },
                    Some(format_iso(cell.date)),
                )
            }
        }
        PickerEvent::TodayClicked(today) => (
            PickerState { open: false, ..state },
            Some(format_iso(today)),
        ),
        PickerEvent::PrevMonth => (
            PickerState { view: state.view.prev(), ..state },
            None,
        ),
        PickerEvent::NextMonth => (
            PickerState { view: state.view.next(), ..state },
            None,
        ),
        PickerEvent::SetMonth(month) if (1..=12).contains(&month) => (
            PickerState { view: ViewMonth { month, ..state.view }, ..state },
            None,
        ),
        PickerEvent::SetMonth(_) => (state, None),
        PickerEvent::SetYear(year) => (
            PickerState { view: ViewMonth { year, ..state.view }, ..state },
            None,
        ),
        // Clearing never toggles the popover and never moves the view.
        PickerEvent::Clear => (state, Some(String::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_at(year: i32, month: u32) -> PickerState {
        PickerState {
            open: true,
            view: ViewMonth { year, month },
        }
    }

    const NO_CONSTRAINTS: PickerContext = PickerContext {
        selected: None,
        min: None,
    };

    #[test]
    fn clicking_a_valid_day_emits_iso_and_closes() {
        let cell = DayCell {
            date: date(2025, 3, 15),
            in_view_month: true,
        };
        let (next, emit) = step(open_at(2025, 3), PickerEvent::DayClicked(cell), &NO_CONSTRAINTS);
        assert_eq!(emit.as_deref(), Some("2025-03-15"));
        assert!(!next.open);
        assert_eq!(next.view, ViewMonth { year: 2025, month: 3 });
    }

    #[test]
    fn clicking_a_disabled_day_does_nothing() {
        let ctx = PickerContext {
            selected: None,
            min: Some(date(2025, 3, 10)),
        };
        let cell = DayCell {
            date: date(2025, 3, 9),
            in_view_month: true,
        };
        let state = open_at(2025, 3);
        let (next, emit) = step(state, PickerEvent::DayClicked(cell), &ctx);
        assert_eq!(emit, None);
        assert_eq!(next, state);
    }

    #[test]
    fn clicking_a_spillover_day_does_nothing() {
        let cell = DayCell {
            date: date(2025, 2, 28),
            in_view_month: false,
        };
        let state = open_at(2025, 3);
        let (next, emit) = step(state, PickerEvent::DayClicked(cell), &NO_CONSTRAINTS);
        assert_eq!(emit, None);
        assert_eq!(next, state);
    }

    #[test]
    fn opening_anchors_view_on_selected_month() {
        let ctx = PickerContext {
            selected: Some(date(2025, 3, 15)),
            min: None,
        };
        // Last displayed month was something else entirely.
        let state = PickerState::closed(ViewMonth { year: 2021, month: 11 });
        let (next, emit) = step(state, PickerEvent::ToggleTrigger, &ctx);
        assert!(next.open);
        assert_eq!(next.view, ViewMonth { year: 2025, month: 3 });
        assert_eq!(emit, None);
    }

    #[test]
    fn opening_without_selection_keeps_current_view() {
        let state = PickerState::closed(ViewMonth { year: 2025, month: 6 });
        let (next, _) = step(state, PickerEvent::ToggleTrigger, &NO_CONSTRAINTS);
        assert!(next.open);
        assert_eq!(next.view, ViewMonth { year: 2025, month: 6 });
    }

    #[test]
    fn toggle_while_open_closes_without_emitting() {
        let (next, emit) = step(open_at(2025, 3), PickerEvent::ToggleTrigger, &NO_CONSTRAINTS);
        assert!(!next.open);
        assert_eq!(emit, None);
    }

    #[test]
    fn outside_pointer_down_closes() {
        let (next, emit) = step(open_at(2025, 3), PickerEvent::OutsidePointerDown, &NO_CONSTRAINTS);
        assert!(!next.open);
        assert_eq!(emit, None);
    }

    #[test]
    fn cancel_closes_without_emitting() {
        let (next, emit) = step(open_at(2025, 3), PickerEvent::Cancel, &NO_CONSTRAINTS);
        assert!(!next.open);
        assert_eq!(emit, None);
    }

    #[test]
    fn today_emits_and_closes() {
        let (next, emit) = step(
            open_at(2020, 1),
            PickerEvent::TodayClicked(date(2025, 8, 28)),
            &NO_CONSTRAINTS,
        );
        assert_eq!(emit.as_deref(), Some("2025-08-28"));
        assert!(!next.open);
    }

    #[test]
    fn month_navigation_stays_open_and_wraps_years() {
        let (next, emit) = step(open_at(2025, 1), PickerEvent::PrevMonth, &NO_CONSTRAINTS);
        assert!(next.open);
        assert_eq!(next.view, ViewMonth { year: 2024, month: 12 });
        assert_eq!(emit, None);

        let (next, _) = step(open_at(2024, 12), PickerEvent::NextMonth, &NO_CONSTRAINTS);
        assert_eq!(next.view, ViewMonth { year: 2025, month: 1 });
    }

    #[test]
    fn header_dropdowns_jump_the_view() {
        let (next, _) = step(open_at(2025, 3), PickerEvent::SetMonth(11), &NO_CONSTRAINTS);
        assert_eq!(next.view, ViewMonth { year: 2025, month: 11 });

        let (next, _) = step(open_at(2025, 3), PickerEvent::SetYear(1999), &NO_CONSTRAINTS);
        assert_eq!(next.view, ViewMonth { year: 1999, month: 3 });

        let (next, _) = step(open_at(2025, 3), PickerEvent::SetMonth(13), &NO_CONSTRAINTS);
        assert_eq!(next.view, ViewMonth { year: 2025, month: 3 });
    }

    #[test]
    fn clear_emits_empty_and_keeps_state() {
        let state = open_at(2025, 3);
        let (next, emit) = step(state, PickerEvent::Clear, &NO_CONSTRAINTS);
        assert_eq!(emit.as_deref(), Some(""));
        assert_eq!(next, state);

        let closed = PickerState::closed(ViewMonth { year: 2025, month: 3 });
        let (next, emit) = step(closed, PickerEvent::Clear, &NO_CONSTRAINTS);
        assert_eq!(emit.as_deref(), Some(""));
        assert_eq!(next, closed);
    }
}
