use shared::DashboardResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::sales_chart::SalesChart;
use crate::components::stat_card::StatCard;
use crate::services::api::ApiClient;
use crate::services::format::{long_datetime, rupiah};
use crate::services::logging::Logger;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let data = use_state(|| None::<DashboardResponse>);
    let error = use_state(|| None::<String>);
    let attempt = use_state(|| 0u32);

    {
        let data = data.clone();
        let error = error.clone();
        use_effect_with(*attempt, move |_| {
            spawn_local(async move {
                match ApiClient::new().dashboard_stats().await {
                    Ok(response) => {
                        error.set(None);
                        data.set(Some(response));
                    }
                    Err(message) => {
                        Logger::error("DashboardPage", &format!("fetch failed: {message}"));
                        error.set(Some(message));
                    }
                }
            });
        });
    }

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_: MouseEvent| attempt.set(*attempt + 1))
    };

    let Some(response) = (*data).clone() else {
        return html! {
            if let Some(message) = (*error).clone() {
                <div class="page-error">
                    <p>{message}</p>
                    <button class="button-secondary" onclick={on_retry}>{"Coba Lagi"}</button>
                </div>
            } else {
                <div class="page-loading">{"Memuat dashboard..."}</div>
            }
        };
    };

    let stats = &response.stats;
    let max_store_sales = response
        .top_stores
        .iter()
        .map(|s| s.total_sales)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    html! {
        <div class="dashboard">
            <div class="stat-grid">
                <StatCard
                    icon="💰"
                    title="Penjualan Hari Ini"
                    value={rupiah(stats.sales_today)}
                    accent="accent-indigo"
                />
                <StatCard
                    icon="🧾"
                    title="Transaksi Hari Ini"
                    value={stats.transactions_today.to_string()}
                    accent="accent-emerald"
                />
                <StatCard
                    icon="⏳"
                    title="User Menunggu"
                    value={stats.pending_users.to_string()}
                    accent="accent-amber"
                />
                <StatCard
                    icon="👥"
                    title="User Aktif"
                    value={stats.active_users.to_string()}
                    accent="accent-sky"
                />
                <StatCard
                    icon="🏬"
                    title="Toko Aktif"
                    value={stats.active_stores.to_string()}
                    accent="accent-rose"
                />
            </div>

            <div class="dashboard-panels">
                <section class="panel panel-wide">
                    <h2>{"Penjualan 7 Hari Terakhir"}</h2>
                    <SalesChart data={response.sales_chart.clone()} />
                </section>

                <section class="panel">
                    <h2>{"Toko Teratas"}</h2>
                    if response.top_stores.is_empty() {
                        <p class="panel-empty">{"Belum ada penjualan."}</p>
                    } else {
                        <ul class="ranking-list">
                            { for response.top_stores.iter().map(|store| {
                                let width = (store.total_sales / max_store_sales * 100.0).round();
                                html! {
                                    <li>
                                        <div class="ranking-row">
                                            <span class="ranking-name">{&store.name}</span>
                                            <span class="ranking-total">{rupiah(store.total_sales)}</span>
                                        </div>
                                        <div class="ranking-bar">
                                            <div
                                                class="ranking-bar-fill"
                                                style={format!("width: {width}%")}
                                            ></div>
                                        </div>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                </section>
            </div>

            <section class="panel">
                <h2>{"Transaksi Terbaru"}</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Nomor Invoice"}</th>
                            <th>{"Kasir"}</th>
                            <th>{"Toko"}</th>
                            <th>{"Waktu"}</th>
                            <th class="cell-right">{"Total"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for response.recent_transactions.iter().map(|tx| html! {
                            <tr key={tx.id}>
                                <td class="cell-mono">{&tx.invoice_number}</td>
                                <td>{&tx.cashier_name}</td>
                                <td>{tx.store_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                <td>{long_datetime(&tx.transaction_date)}</td>
                                <td class="cell-right">{rupiah(tx.total_amount)}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </section>
        </div>
    }
}
