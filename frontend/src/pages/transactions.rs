use shared::{TransactionListResponse, TransactionQuery};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::date_picker::DatePicker;
use crate::components::pagination::Pagination;
use crate::components::searchable_select::{SearchableSelect, SelectOption, ALL_VALUE};
use crate::hooks::use_debounce;
use crate::services::api::ApiClient;
use crate::services::calendar::{format_iso, today};
use crate::services::download;
use crate::services::format::{long_datetime, rupiah};
use crate::services::logging::Logger;

const SEARCH_DEBOUNCE_MS: u32 = 500;

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let page = use_state(|| 1u32);
    let search = use_state(String::new);
    let store_filter = use_state(|| ALL_VALUE.to_string());
    let start_date = use_state(String::new);
    let end_date = use_state(String::new);

    let data = use_state(|| None::<TransactionListResponse>);
    let error = use_state(|| None::<String>);
    let exporting = use_state(|| false);
    let store_options = use_state(Vec::<SelectOption>::new);

    let debounced_search = use_debounce((*search).clone(), SEARCH_DEBOUNCE_MS);

    // Store list for the filter dropdown, fetched once.
    {
        let store_options = store_options.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::new().store_refs().await {
                    Ok(stores) => {
                        let mut options = vec![SelectOption {
                            value: ALL_VALUE.to_string(),
                            label: "Semua Toko".to_string(),
                        }];
                        options.extend(stores.into_iter().map(|store| SelectOption {
                            value: store.id.to_string(),
                            label: store.name,
                        }));
                        store_options.set(options);
                    }
                    Err(message) => {
                        Logger::warn("TransactionsPage", &format!("store list failed: {message}"));
                    }
                }
            });
        });
    }

    // Changing any filter jumps back to the first page.
    {
        let page = page.clone();
        use_effect_with(
            (
                debounced_search.clone(),
                (*store_filter).clone(),
                (*start_date).clone(),
                (*end_date).clone(),
            ),
            move |_| {
                page.set(1);
            },
        );
    }

    {
        let data = data.clone();
        let error = error.clone();
        let query = TransactionQuery {
            page: *page,
            search: debounced_search.clone(),
            store_id: (*store_filter).clone(),
            start_date: (*start_date).clone(),
            end_date: (*end_date).clone(),
        };
        use_effect_with(query, move |query| {
            let query = query.clone();
            spawn_local(async move {
                match ApiClient::new().transactions(&query).await {
                    Ok(response) => {
                        error.set(None);
                        data.set(Some(response));
                    }
                    Err(message) => {
                        Logger::error("TransactionsPage", &format!("fetch failed: {message}"));
                        error.set(Some(message));
                    }
                }
            });
        });
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };
    let on_store = {
        let store_filter = store_filter.clone();
        Callback::from(move |value: String| store_filter.set(value))
    };
    let on_start = {
        let start_date = start_date.clone();
        Callback::from(move |value: String| start_date.set(value))
    };
    let on_end = {
        let end_date = end_date.clone();
        Callback::from(move |value: String| end_date.set(value))
    };

    let on_export = {
        let exporting = exporting.clone();
        let query = TransactionQuery {
            page: *page,
            search: debounced_search.clone(),
            store_id: (*store_filter).clone(),
            start_date: (*start_date).clone(),
            end_date: (*end_date).clone(),
        };
        Callback::from(move |_: MouseEvent| {
            if *exporting {
                return;
            }
            exporting.set(true);
            let exporting = exporting.clone();
            let query = query.clone();
            spawn_local(async move {
                match ApiClient::new().export_transactions(&query).await {
                    Ok(bytes) => {
                        let filename =
                            format!("transactions-export-{}.xlsx", format_iso(today()));
                        if let Err(message) = download::save_bytes(&bytes, &filename) {
                            Logger::error("TransactionsPage", &format!("save failed: {message}"));
                        }
                    }
                    Err(message) => {
                        Logger::error("TransactionsPage", &format!("export failed: {message}"));
                    }
                }
                exporting.set(false);
            });
        })
    };

    let on_prev = {
        let page = page.clone();
        Callback::from(move |_| {
            if *page > 1 {
                page.set(*page - 1);
            }
        })
    };
    let on_next = {
        let page = page.clone();
        Callback::from(move |_| page.set(*page + 1))
    };

    let total_pages = data.as_ref().map(|d| d.total_pages).unwrap_or(0);

    html! {
        <div class="transactions-page">
            <div class="filter-bar">
                <input
                    type="search"
                    class="filter-search"
                    placeholder="Cari invoice atau kasir..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <SearchableSelect
                    options={(*store_options).clone()}
                    value={(*store_filter).clone()}
                    on_change={on_store}
                    placeholder="Semua Toko"
                />
                <DatePicker
                    id="filter-start"
                    label="Dari tanggal"
                    value={(*start_date).clone()}
                    on_change={on_start}
                />
                <DatePicker
                    id="filter-end"
                    label="Sampai tanggal"
                    value={(*end_date).clone()}
                    on_change={on_end}
                    min={(!start_date.is_empty()).then(|| (*start_date).clone())}
                />
                <button class="button-secondary" onclick={on_export} disabled={*exporting}>
                    { if *exporting { "Mengunduh..." } else { "Export Excel" } }
                </button>
            </div>

            if let Some(message) = (*error).clone() {
                <div class="page-error">{message}</div>
            }

            <section class="panel">
                if let Some(response) = (*data).clone() {
                    if response.transactions.is_empty() {
                        <p class="panel-empty">{"Tidak ada transaksi yang cocok."}</p>
                    } else {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Nomor Invoice"}</th>
                                    <th>{"Kasir"}</th>
                                    <th>{"Toko"}</th>
                                    <th>{"Pembayaran"}</th>
                                    <th>{"Waktu"}</th>
                                    <th class="cell-right">{"Total"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for response.transactions.iter().map(|tx| html! {
                                    <tr key={tx.id}>
                                        <td class="cell-mono">{&tx.invoice_number}</td>
                                        <td>{&tx.cashier_name}</td>
                                        <td>{tx.store_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{&tx.payment_method}</td>
                                        <td>{long_datetime(&tx.transaction_date)}</td>
                                        <td class="cell-right">{rupiah(tx.total_amount)}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    }
                } else {
                    <p class="panel-empty">{"Memuat transaksi..."}</p>
                }
            </section>

            <Pagination page={*page} {total_pages} {on_prev} {on_next} />
        </div>
    }
}
