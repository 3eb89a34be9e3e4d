use common::{format_currency, format_percent, nav_sections, TimelineView};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::StatisticHeader;
use crate::data::use_dashboard_snapshot;
use crate::settings::get_settings;
use crate::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let snapshot = use_dashboard_snapshot(TimelineView::Yearly);
    let symbol = get_settings().currency_symbol;
    let summary = &snapshot.summary;

    html! {
        <div class="flex flex-col gap-6">
            <div>
                <h1 class="text-2xl font-bold">{"Multi-Company KPI Dashboard"}</h1>
                <p class="text-base-content/60">{"Group totals across all reported years"}</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatisticHeader
                    title="Revenue"
                    value={format_currency(summary.total_revenue, &symbol)}
                    icon="fa-sack-dollar"
                    trend={snapshot.revenue_change.clone()}
                />
                <StatisticHeader
                    title="Net Profit"
                    value={format_currency(summary.total_profit, &symbol)}
                    icon="fa-coins"
                    trend={snapshot.profit_change.clone()}
                />
                <StatisticHeader
                    title="Profit Margin"
                    value={format_percent(summary.profit_margin_pct)}
                    icon="fa-percent"
                />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                { for nav_sections().into_iter().filter_map(|section| {
                    let route = Route::recognize(&section.url)?;
                    Some(html! {
                        <Link<Route> to={route} classes="card bg-base-100 shadow hover:shadow-lg transition-shadow">
                            <div class="card-body">
                                <h2 class="card-title">{ section.title }</h2>
                                <p class="text-base-content/60">
                                    { format!("{} pages", section.items.len()) }
                                </p>
                            </div>
                        </Link<Route>>
                    })
                }) }
            </div>
        </div>
    }
}
