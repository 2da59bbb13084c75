use gloo::dialogs::confirm;
use shared::{ListQuery, Region, SaveStoreRequest, Store, StoreListResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::store_edit_modal::StoreEditModal;
use crate::hooks::use_debounce;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const SEARCH_DEBOUNCE_MS: u32 = 500;

#[function_component(StoresPage)]
pub fn stores_page() -> Html {
    let page = use_state(|| 1u32);
    let search = use_state(String::new);
    let data = use_state(|| None::<StoreListResponse>);
    let error = use_state(|| None::<String>);
    let regions = use_state(Vec::<Region>::new);
    // Bumped after every successful save or delete to refetch the list.
    let refresh = use_state(|| 0u32);

    let modal_open = use_state(|| false);
    let editing = use_state(|| None::<Store>);
    let saving = use_state(|| false);

    let debounced_search = use_debounce((*search).clone(), SEARCH_DEBOUNCE_MS);

    {
        let regions = regions.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::new().regions().await {
                    Ok(list) => regions.set(list),
                    Err(message) => {
                        Logger::warn("StoresPage", &format!("region list failed: {message}"));
                    }
                }
            });
        });
    }

    {
        let page = page.clone();
        use_effect_with(debounced_search.clone(), move |_| {
            page.set(1);
        });
    }

    {
        let data = data.clone();
        let error = error.clone();
        use_effect_with(
            (*page, debounced_search.clone(), *refresh),
            move |(page, search, _)| {
                let query = ListQuery {
                    page: *page,
                    search: search.clone(),
                };
                spawn_local(async move {
                    match ApiClient::new().stores(&query).await {
                        Ok(response) => {
                            error.set(None);
                            data.set(Some(response));
                        }
                        Err(message) => {
                            Logger::error("StoresPage", &format!("fetch failed: {message}"));
                            error.set(Some(message));
                        }
                    }
                });
            },
        );
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_add = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            modal_open.set(true);
        })
    };

    let on_edit = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        Callback::from(move |store: Store| {
            editing.set(Some(store));
            modal_open.set(true);
        })
    };

    let on_close = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    let on_save = {
        let modal_open = modal_open.clone();
        let saving = saving.clone();
        let refresh = refresh.clone();
        Callback::from(move |(request, id): (SaveStoreRequest, Option<i64>)| {
            if *saving {
                return;
            }
            saving.set(true);
            let modal_open = modal_open.clone();
            let saving = saving.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                let result = match id {
                    Some(id) => api.update_store(id, &request).await,
                    None => api.create_store(&request).await,
                };
                match result {
                    Ok(()) => {
                        modal_open.set(false);
                        refresh.set(*refresh + 1);
                    }
                    Err(message) => {
                        Logger::error("StoresPage", &format!("save failed: {message}"));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let refresh = refresh.clone();
        Callback::from(move |store: Store| {
            if !confirm(&format!("Hapus toko \"{}\"?", store.name)) {
                return;
            }
            let refresh = refresh.clone();
            spawn_local(async move {
                match ApiClient::new().delete_store(store.id).await {
                    Ok(()) => refresh.set(*refresh + 1),
                    Err(message) => {
                        Logger::error("StoresPage", &format!("delete failed: {message}"));
                    }
                }
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
        <div class="stores-page">
            <div class="filter-bar">
                <input
                    type="search"
                    class="filter-search"
                    placeholder="Cari nama toko..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <button class="button-primary" onclick={on_add}>{"Tambah Toko"}</button>
            </div>

            if let Some(message) = (*error).clone() {
                <div class="page-error">{message}</div>
            }

            <section class="panel">
                if let Some(response) = (*data).clone() {
                    if response.stores.is_empty() {
                        <p class="panel-empty">{"Tidak ada toko yang cocok."}</p>
                    } else {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Nama"}</th>
                                    <th>{"Wilayah"}</th>
                                    <th>{"Telepon"}</th>
                                    <th>{"Status"}</th>
                                    <th class="cell-right">{"Aksi"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for response.stores.iter().map(|store| {
                                    let edit = {
                                        let on_edit = on_edit.clone();
                                        let store = store.clone();
                                        Callback::from(move |_: MouseEvent| on_edit.emit(store.clone()))
                                    };
                                    let delete = {
                                        let on_delete = on_delete.clone();
                                        let store = store.clone();
                                        Callback::from(move |_: MouseEvent| on_delete.emit(store.clone()))
                                    };
                                    html! {
                                        <tr key={store.id}>
                                            <td>{&store.name}</td>
                                            <td>{store.region_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{store.phone.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>
                                                <span class={store.status.badge_class()}>
                                                    {store.status.label()}
                                                </span>
                                            </td>
                                            <td class="cell-right">
                                                <button class="button-ghost" onclick={edit}>{"Ubah"}</button>
                                                <button class="button-danger" onclick={delete}>{"Hapus"}</button>
                                            </td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    }
                } else {
                    <p class="panel-empty">{"Memuat toko..."}</p>
                }
            </section>

            <Pagination page={*page} {total_pages} {on_prev} {on_next} />

            <StoreEditModal
                is_open={*modal_open}
                store={(*editing).clone()}
                regions={(*regions).clone()}
                {on_close}
                {on_save}
                busy={*saving}
            />
        </div>
    }
}
