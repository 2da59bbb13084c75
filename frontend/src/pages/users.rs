use shared::{ListQuery, Region, Role, StoreRef, UpdateUserRequest, User, UserListResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::user_edit_modal::UserEditModal;
use crate::hooks::use_debounce;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const SEARCH_DEBOUNCE_MS: u32 = 500;

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let page = use_state(|| 1u32);
    let search = use_state(String::new);
    let data = use_state(|| None::<UserListResponse>);
    let error = use_state(|| None::<String>);
    let refresh = use_state(|| 0u32);

    let roles = use_state(Vec::<Role>::new);
    let stores = use_state(Vec::<StoreRef>::new);
    let regions = use_state(Vec::<Region>::new);

    let modal_open = use_state(|| false);
    let editing = use_state(|| None::<User>);
    let saving = use_state(|| false);

    let debounced_search = use_debounce((*search).clone(), SEARCH_DEBOUNCE_MS);

    // Reference data for the edit form, fetched once.
    {
        let roles = roles.clone();
        let stores = stores.clone();
        let regions = regions.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let api = ApiClient::new();
                match api.roles().await {
                    Ok(list) => roles.set(list),
                    Err(message) => {
                        Logger::warn("UsersPage", &format!("role list failed: {message}"))
                    }
                }
                match api.store_refs().await {
                    Ok(list) => stores.set(list),
                    Err(message) => {
                        Logger::warn("UsersPage", &format!("store list failed: {message}"))
                    }
                }
                match api.regions().await {
                    Ok(list) => regions.set(list),
                    Err(message) => {
                        Logger::warn("UsersPage", &format!("region list failed: {message}"))
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
                    match ApiClient::new().users(&query).await {
                        Ok(response) => {
                            error.set(None);
                            data.set(Some(response));
                        }
                        Err(message) => {
                            Logger::error("UsersPage", &format!("fetch failed: {message}"));
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

    let on_edit = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        Callback::from(move |user: User| {
            editing.set(Some(user));
            modal_open.set(true);
        })
    };

    let on_close = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    let on_save = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        let refresh = refresh.clone();
        Callback::from(move |request: UpdateUserRequest| {
            let Some(user) = (*editing).clone() else {
                return;
            };
            if *saving {
                return;
            }
            saving.set(true);
            let modal_open = modal_open.clone();
            let saving = saving.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match ApiClient::new().update_user(user.id, &request).await {
                    Ok(()) => {
                        modal_open.set(false);
                        refresh.set(*refresh + 1);
                    }
                    Err(message) => {
                        Logger::error("UsersPage", &format!("save failed: {message}"));
                    }
                }
                saving.set(false);
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
        <div class="users-page">
            <div class="filter-bar">
                <input
                    type="search"
                    class="filter-search"
                    placeholder="Cari nama atau username..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
            </div>

            if let Some(message) = (*error).clone() {
                <div class="page-error">{message}</div>
            }

            <section class="panel">
                if let Some(response) = (*data).clone() {
                    if response.users.is_empty() {
                        <p class="panel-empty">{"Tidak ada user yang cocok."}</p>
                    } else {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Nama"}</th>
                                    <th>{"Telegram"}</th>
                                    <th>{"Role"}</th>
                                    <th>{"Toko"}</th>
                                    <th>{"Wilayah"}</th>
                                    <th>{"Status"}</th>
                                    <th class="cell-right">{"Aksi"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for response.users.iter().map(|user| {
                                    let edit = {
                                        let on_edit = on_edit.clone();
                                        let user = user.clone();
                                        Callback::from(move |_: MouseEvent| on_edit.emit(user.clone()))
                                    };
                                    html! {
                                        <tr key={user.id}>
                                            <td>{&user.full_name}</td>
                                            <td class="cell-mono">{format!("@{}", user.telegram_username)}</td>
                                            <td>{user.role_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{user.store_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{user.region_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>
                                                <span class={user.status.badge_class()}>
                                                    {user.status.label()}
                                                </span>
                                            </td>
                                            <td class="cell-right">
                                                <button class="button-ghost" onclick={edit}>{"Kelola"}</button>
                                            </td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    }
                } else {
                    <p class="panel-empty">{"Memuat user..."}</p>
                }
            </section>

            <Pagination page={*page} {total_pages} {on_prev} {on_next} />

            <UserEditModal
                is_open={*modal_open}
                user={(*editing).clone()}
                roles={(*roles).clone()}
                stores={(*stores).clone()}
                regions={(*regions).clone()}
                {on_close}
                {on_save}
                busy={*saving}
            />
        </div>
    }
}
