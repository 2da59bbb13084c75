//! Filterable dropdown used for the store filter on the transactions page.
//! One parameterized component; the minimum query length and the ever-visible
//! "all" option are configuration, not copies.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

pub const ALL_VALUE: &str = "all";

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Properties, PartialEq)]
pub struct SearchableSelectProps {
    pub options: Vec<SelectOption>,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("Pilih..."))]
    pub placeholder: AttrValue,
    /// Options other than "all" stay hidden until this many characters are typed
    #[prop_or(3)]
    pub min_query: usize,
}

#[function_component(SearchableSelect)]
pub fn searchable_select(props: &SearchableSelectProps) -> Html {
    let open = use_state(|| false);
    let query = use_state(String::new);
    let container_ref = use_node_ref();

    // Same scoped-listener discipline as the date picker: one document
    // listener per open period, dropped on close/unmount.
    {
        let open = open.clone();
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
                        open.set(false);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_toggle = {
        let open = open.clone();
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            if !*open {
                query.set(String::new());
            }
            open.set(!*open);
        })
    };

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_clear = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_change.emit(ALL_VALUE.to_string());
        })
    };

    let visible = filter_options(&props.options, &query, props.min_query);
    let selected_label = props
        .options
        .iter()
        .find(|o| o.value == props.value)
        .map(|o| o.label.clone());

    html! {
        <div class="searchable-select" ref={container_ref}>
            <div class={classes!("select-trigger", (*open).then_some("open"))} onclick={on_toggle}>
                <span class={classes!("select-text", selected_label.is_none().then_some("placeholder"))}>
                    {selected_label.unwrap_or_else(|| props.placeholder.to_string())}
                </span>
                {if props.value != ALL_VALUE {
                    html! {
                        <button type="button" class="clear-button" aria-label="Clear selection" onclick={on_clear}>
                            {"×"}
                        </button>
                    }
                } else { html! {} }}
            </div>

            {if *open {
                html! {
                    <div class="select-dropdown">
                        <input
                            type="text"
                            class="select-search"
                            placeholder="Ketik untuk mencari..."
                            value={(*query).clone()}
                            oninput={on_query_input}
                        />
                        {if visible.is_empty() {
                            let hint = if query.chars().count() < props.min_query {
                                format!("Ketik minimal {} huruf untuk mencari...", props.min_query)
                            } else {
                                "Tidak ditemukan".to_string()
                            };
                            html! { <div class="select-empty">{hint}</div> }
                        } else {
                            html! {
                                <ul class="select-options">
                                    {for visible.into_iter().map(|option| {
                                        let on_change = props.on_change.clone();
                                        let open = open.clone();
                                        let value = option.value.clone();
                                        let is_active = option.value == props.value;
                                        let onclick = Callback::from(move |_: MouseEvent| {
                                            on_change.emit(value.clone());
                                            open.set(false);
                                        });
                                        html! {
                                            <li class={classes!("select-option", is_active.then_some("active"))} {onclick}>
                                                {option.label}
                                            </li>
                                        }
                                    })}
                                </ul>
                            }
                        }}
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}

/// The "all" option is always offered; everything else requires a query of at
/// least `min_query` characters and a case-insensitive substring match.
fn filter_options(options: &[SelectOption], query: &str, min_query: usize) -> Vec<SelectOption> {
    let mut visible: Vec<SelectOption> = options
        .iter()
        .filter(|o| o.value == ALL_VALUE)
        .cloned()
        .collect();

    if query.chars().count() >= min_query {
        let needle = query.to_lowercase();
        visible.extend(
            options
                .iter()
                .filter(|o| o.value != ALL_VALUE && o.label.to_lowercase().contains(&needle))
                .cloned(),
        );
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption { value: ALL_VALUE.to_string(), label: "Semua Toko".to_string() },
            SelectOption { value: "1".to_string(), label: "VillaParfum Senayan".to_string() },
            SelectOption { value: "2".to_string(), label: "VillaParfum Bandung".to_string() },
        ]
    }

    #[test]
    fn short_query_only_shows_all_option() {
        let visible = filter_options(&options(), "se", 3);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].value, ALL_VALUE);
    }

    #[test]
    fn long_query_filters_case_insensitively() {
        let visible = filter_options(&options(), "BANDUNG", 3);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[1].value, "2");
    }

    #[test]
    fn unmatched_query_keeps_all_option() {
        let visible = filter_options(&options(), "surabaya", 3);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].value, ALL_VALUE);
    }
}
