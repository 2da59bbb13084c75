use yew::prelude::*;

/// Shared pagination footer for the transaction, store, and user tables.
#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: u32,
    pub total_pages: u32,
    pub on_prev: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let at_start = props.page <= 1;
    let at_end = props.total_pages == 0 || props.page >= props.total_pages;

    html! {
        <div class="pagination">
            <span class="pagination-label">
                {format!("Halaman {} dari {}", props.page, props.total_pages.max(1))}
            </span>
            <div class="pagination-buttons">
                <button
                    type="button"
                    class="pagination-button"
                    disabled={at_start}
                    onclick={props.on_prev.clone()}
                >
                    {"Prev"}
                </button>
                <button
                    type="button"
                    class="pagination-button"
                    disabled={at_end}
                    onclick={props.on_next.clone()}
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}
