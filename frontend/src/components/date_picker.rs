//! Single date-picker control used by every page that filters on a date.
//!
//! The control is fully controlled: the selected value lives with the parent
//! and arrives through `value`; the picker only reports changes through
//! `on_change` as zero-padded `YYYY-MM-DD` strings (or `""` on clear). All
//! transition logic lives in `services::picker`; this file binds it to the
//! DOM and owns the popover's outside-click listener.

use std::rc::Rc;

use chrono::Datelike;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlSelectElement};
use yew::prelude::*;

use crate::services::calendar::{self, classify, generate_grid, DayState, ViewMonth};
use crate::services::format::{display_date, month_long};
use crate::services::picker::{step, PickerContext, PickerEvent, PickerState};

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    pub id: AttrValue,
    pub label: AttrValue,
    /// Selected date as `YYYY-MM-DD`, or empty for "no date chosen"
    pub value: String,
    pub on_change: Callback<String>,
    /// Dates strictly before this bound render disabled
    #[prop_or_default]
    pub min: Option<String>,
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    // Malformed value/min degrade to absence, never to an error state.
    let selected = calendar::parse_iso(&props.value);
    let min = props.min.as_deref().and_then(calendar::parse_iso);
    let today = calendar::today();

    let open = use_state(|| false);
    let view = use_state(|| {
        selected
            .map(ViewMonth::containing)
            .unwrap_or_else(|| ViewMonth::containing(calendar::today()))
    });
    let container_ref = use_node_ref();

    let dispatch: Rc<dyn Fn(PickerEvent)> = {
        let open = open.clone();
        let view = view.clone();
        let on_change = props.on_change.clone();
        Rc::new(move |event: PickerEvent| {
            let state = PickerState {
                open: *open,
                view: *view,
            };
            let ctx = PickerContext { selected, min };
            let (next, emit) = step(state, event, &ctx);
            open.set(next.open);
            view.set(next.view);
            if let Some(value) = emit {
                on_change.emit(value);
            }
        })
    };

    // Outside-dismiss listener, scoped to the open period: acquired when the
    // popover opens, dropped by the effect cleanup on close and on unmount.
    // Dismissal goes through the reducer like every other transition.
    {
        let dispatch = dispatch.clone();
        let container_ref = container_ref.clone();
        use_effect_with(*open, move |is_open| {
            let listener = is_open.then(|| {
                EventListener::new(&gloo::utils::document(), "mousedown", move |event| {
                    let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
                    let inside = match (target, container_ref.cast::<Element>()) {
                        (Some(element), Some(container)) => container.contains(Some(&element)),
                        _ => false,
                    };
                    if !inside {
                        dispatch(PickerEvent::OutsidePointerDown);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch(PickerEvent::ToggleTrigger))
    };
    let on_clear = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            // Must not bubble into the trigger toggle.
            e.stop_propagation();
            dispatch(PickerEvent::Clear);
        })
    };
    let on_prev = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch(PickerEvent::PrevMonth))
    };
    let on_next = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch(PickerEvent::NextMonth))
    };
    let on_month_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(month) = select.value().parse::<u32>() {
                dispatch(PickerEvent::SetMonth(month));
            }
        })
    };
    let on_year_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(year) = select.value().parse::<i32>() {
                dispatch(PickerEvent::SetYear(year));
            }
        })
    };
    let on_cancel = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch(PickerEvent::Cancel))
    };
    let on_today = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch(PickerEvent::TodayClicked(calendar::today())))
    };

    let display_text = if props.value.is_empty() {
        "Pilih tanggal".to_string()
    } else {
        display_date(&props.value)
    };

    html! {
        <div class="date-picker" ref={container_ref}>
            <label for={props.id.clone()} class="date-picker-label">{&props.label}</label>

            <div id={props.id.clone()} class={classes!("date-picker-trigger", (*open).then_some("open"))} onclick={on_toggle}>
                <span class="calendar-icon">{"📅"}</span>
                <span class={classes!("date-text", props.value.is_empty().then_some("placeholder"))}>
                    {display_text}
                </span>
                {if !props.value.is_empty() {
                    html! {
                        <button type="button" class="clear-button" aria-label="Clear date" onclick={on_clear}>
                            {"×"}
                        </button>
                    }
                } else { html! {} }}
            </div>

            {if *open {
                let grid = generate_grid(*view);
                html! {
                    <div class="calendar-dropdown">
                        <div class="calendar-header">
                            <button type="button" class="nav-button" onclick={on_prev}>{"‹"}</button>
                            <select class="month-select" onchange={on_month_select}>
                                {for (1..=12u32).map(|m| html! {
                                    <option value={m.to_string()} selected={m == view.month}>
                                        {month_long(m)}
                                    </option>
                                })}
                            </select>
                            <select class="year-select" onchange={on_year_select}>
                                {for (today.year() - 50..=today.year() + 50).map(|y| html! {
                                    <option value={y.to_string()} selected={y == view.year}>
                                        {y}
                                    </option>
                                })}
                            </select>
                            <button type="button" class="nav-button" onclick={on_next}>{"›"}</button>
                        </div>

                        <div class="weekday-header">
                            {for ["Min", "Sen", "Sel", "Rab", "Kam", "Jum", "Sab"].iter().map(|d| html! {
                                <span class="weekday">{*d}</span>
                            })}
                        </div>

                        <div class="calendar-days">
                            {for grid.into_iter().map(|cell| {
                                let state = classify(&cell, selected, min, today);
                                let onclick = {
                                    let dispatch = dispatch.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        dispatch(PickerEvent::DayClicked(cell));
                                    })
                                };
                                html! {
                                    <button
                                        type="button"
                                        class={day_class(cell.in_view_month, state)}
                                        disabled={state == DayState::Disabled}
                                        {onclick}
                                    >
                                        {cell.date.day()}
                                    </button>
                                }
                            })}
                        </div>

                        <div class="calendar-footer">
                            <button type="button" class="cancel-button" onclick={on_cancel}>{"Batal"}</button>
                            <button type="button" class="today-button" onclick={on_today}>{"Hari Ini"}</button>
                        </div>
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}

fn day_class(in_view_month: bool, state: DayState) -> Classes {
    classes!(
        "calendar-day",
        (!in_view_month).then_some("other-month"),
        match state {
            DayState::Disabled => Some("disabled"),
            DayState::Selected => Some("selected"),
            DayState::Today => Some("today"),
            DayState::Plain => None,
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_class_reflects_state_precedence() {
        assert_eq!(
            day_class(true, DayState::Disabled),
            classes!("calendar-day", "disabled")
        );
        assert_eq!(
            day_class(false, DayState::Selected),
            classes!("calendar-day", "other-month", "selected")
        );
        assert_eq!(day_class(true, DayState::Plain), classes!("calendar-day"));
    }
}
