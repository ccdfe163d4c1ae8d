//! Dashboard page with stat cards, revenue chart, and CSV report download.

use leptos::prelude::*;

use crate::components::line_chart::LineChart;
use crate::state::dashboard::{REVENUE, STAT_CARDS, TRANSPORT_ROWS, csv_data_uri, format_currency, report_csv};
use crate::state::ui::UiState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let card_class = move |extra: &'static str| move || format!("{} {extra} p-4 rounded-xl", ui.get().card_class());

    let report_href = csv_data_uri(&report_csv(&TRANSPORT_ROWS));

    let cards = STAT_CARDS
        .iter()
        .map(|(label, growth)| {
            view! {
                <div class=card_class("shadow-md")>
                    <div class="text-lg font-medium">{*label}</div>
                    <div class="text-green-400 text-sm mt-2 font-semibold">{format!("+{growth}%")}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard-page p-4 md:p-6">
            <div class="dashboard-page__header flex justify-between items-start mb-4">
                <div>
                    <h1 class="text-2xl md:text-3xl font-bold">"DASHBOARD"</h1>
                    <p class="text-gray-400">"Welcome to your dashboard"</p>
                </div>
                <a
                    class="dashboard-page__download bg-indigo-600 text-white px-4 py-2 rounded-md hover:bg-indigo-700"
                    href=report_href
                    download="report.csv"
                    rel="external"
                >
                    "DOWNLOAD REPORTS"
                </a>
            </div>
            <div class="dashboard-page__cards grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-6">{cards}</div>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-4">
                <div class=card_class("lg:col-span-2")>
                    <h2 class="text-xl font-semibold mb-2">"Revenue Generated"</h2>
                    <div class="text-green-400 text-2xl mb-4">{format_currency(REVENUE)}</div>
                    <LineChart rows=&TRANSPORT_ROWS/>
                </div>
                <div class=card_class("")>
                    <h2 class="text-xl font-semibold mb-2">"Recent Post"</h2>
                    <div class="text-gray-400">"No recent post found"</div>
                </div>
            </div>
        </div>
    }
}
