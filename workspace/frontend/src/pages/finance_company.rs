use common::{format_currency, format_percent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::StatisticHeader;
use crate::components::charts::RevenueExpensesChart;
use crate::components::tables::FinancialPerformanceTable;
use crate::data::use_company_snapshot;
use crate::router::company_name;
use crate::settings::get_settings;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub company_id: String,
}

#[function_component(FinanceCompanyPage)]
pub fn finance_company_page(props: &Props) -> Html {
    let snapshot = use_company_snapshot(props.company_id.clone());
    let symbol = get_settings().currency_symbol;
    let name = company_name(&props.company_id);

    let Some(snapshot) = &*snapshot else {
        return html! {
            <div class="hero min-h-[50vh]">
                <div class="hero-content text-center">
                    <div>
                        <h1 class="text-2xl font-bold">{"Company not found"}</h1>
                        <p class="py-4 text-base-content/60">
                            { format!("There is no financial data for \"{}\".", props.company_id) }
                        </p>
                        <Link<Route> to={Route::Finance} classes="btn btn-primary">{"Back to Finance"}</Link<Route>>
                    </div>
                </div>
            </div>
        };
    };

    let summary = &snapshot.summary;
    html! {
        <div class="flex flex-col gap-6">
            <div>
                <h1 class="text-2xl font-bold">{ format!("Finance KPIs - {}", name) }</h1>
                <p class="text-base-content/60">{"Financial performance for this company"}</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatisticHeader
                    title="Company Revenue"
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
                    description={format!("Expenses {}", format_currency(summary.total_expenses, &symbol))}
                />
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Revenue vs Expenses"}</h2>
                    <RevenueExpensesChart records={snapshot.records.clone()} />
                </div>
            </div>

            <FinancialPerformanceTable table={snapshot.performance.clone()} currency_symbol={symbol.clone()} />
        </div>
    }
}
