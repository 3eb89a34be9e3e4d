use common::{format_currency, format_percent, TimelineView, ViewSelector};
use compute::{BreakdownKind, PeriodChange, PeriodRatios};
use yew::prelude::*;

use crate::components::cards::{MetricsCard, StatisticHeader};
use crate::components::charts::{BreakdownChart, CashFlowChart, ProfitChart, RevenueExpensesChart};
use crate::components::filters::{PeriodSelect, TimelineSelector};
use crate::components::tables::{
    BalanceSheetTable, ExpenseBreakdownTable, FinancialPerformanceTable, ProfitLossTable,
};
use crate::data::{store, use_dashboard_snapshot};
use crate::settings::get_settings;

/// Ratios of the chosen period, falling back to the latest one when the
/// choice is missing from the current view.
pub fn ratio_metrics<'a>(ratios: &'a [PeriodRatios], period: Option<&str>) -> Option<&'a PeriodRatios> {
    period
        .and_then(|p| ratios.iter().find(|r| r.period == p))
        .or_else(|| ratios.last())
}

fn trend_description(change: Option<&PeriodChange>, view: TimelineView) -> String {
    match change {
        Some(change) => format!("Latest {}: {}", view.period_noun(), change.period),
        None => format!("All {} periods", view.label().to_lowercase()),
    }
}

#[function_component(FinancePage)]
pub fn finance_page() -> Html {
    let settings = get_settings();
    let selector = use_state(|| ViewSelector::new(settings.default_view));
    let ratio_period = use_state(|| None::<String>);
    let view = selector.current();
    let snapshot = use_dashboard_snapshot(view);
    let symbol = settings.currency_symbol.clone();
    let store = store();

    let on_select = {
        let selector = selector.clone();
        Callback::from(move |view: TimelineView| {
            let mut next = *selector;
            if next.select(view) {
                log::debug!("Timeline view changed to {}", view);
                selector.set(next);
            }
        })
    };

    let on_ratio_period = {
        let ratio_period = ratio_period.clone();
        Callback::from(move |period: String| ratio_period.set(Some(period)))
    };

    let summary = &snapshot.summary;
    let periods: Vec<String> = snapshot.ratios.iter().map(|r| r.period.clone()).collect();
    let current_ratios = ratio_metrics(&snapshot.ratios, ratio_period.as_deref());
    let metrics: Vec<(String, String)> = current_ratios
        .map(|r| {
            r.ratios
                .iter()
                .map(|ratio| (ratio.name.clone(), ratio.display_value()))
                .collect()
        })
        .unwrap_or_default();

    html! {
        <div class="flex flex-col gap-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold">{"Finance KPIs"}</h1>
                    <p class="text-base-content/60">{"Financial performance across all companies"}</p>
                </div>
                <TimelineSelector selected={view} {on_select} />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
                <StatisticHeader
                    title="Total Revenue"
                    value={format_currency(summary.total_revenue, &symbol)}
                    icon="fa-sack-dollar"
                    description={trend_description(snapshot.revenue_change.as_ref(), view)}
                    trend={snapshot.revenue_change.clone()}
                />
                <StatisticHeader
                    title="Total Expenses"
                    value={format_currency(summary.total_expenses, &symbol)}
                    icon="fa-receipt"
                    description="Cost of goods sold and operating expenses"
                />
                <StatisticHeader
                    title="Net Profit"
                    value={format_currency(summary.total_profit, &symbol)}
                    icon="fa-coins"
                    description={trend_description(snapshot.profit_change.as_ref(), view)}
                    trend={snapshot.profit_change.clone()}
                />
                <StatisticHeader
                    title="Profit Margin"
                    value={format_percent(summary.profit_margin_pct)}
                    icon="fa-percent"
                    description="Profit over revenue"
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Revenue vs Expenses"}</h2>
                        <RevenueExpensesChart records={snapshot.records.clone()} />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Profit"}</h2>
                        <ProfitChart records={snapshot.records.clone()} />
                    </div>
                </div>
            </div>

            <FinancialPerformanceTable table={snapshot.performance.clone()} currency_symbol={symbol.clone()} />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                <ExpenseBreakdownTable categories={store.expense_breakdown().to_vec()} currency_symbol={symbol.clone()} />
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Cash Flow"}</h2>
                        <CashFlowChart records={store.cash_flow().to_vec()} />
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                { for BreakdownKind::ALL.into_iter().map(|kind| html! {
                    <BreakdownChart
                        {kind}
                        rows={snapshot.breakdown(kind).to_vec()}
                        amounts={snapshot.breakdown_amounts(kind)}
                        currency_symbol={symbol.clone()}
                    />
                }) }
            </div>

            <ProfitLossTable statements={snapshot.profit_and_loss.clone()} currency_symbol={symbol.clone()} />
            <BalanceSheetTable sheets={snapshot.balance_sheets.clone()} currency_symbol={symbol.clone()} />

            <MetricsCard
                title="Financial Ratios"
                description={current_ratios.map(|r| format!("Period {}", r.period))}
                icon="fa-scale-balanced"
                {metrics}
            >
                if !periods.is_empty() {
                    <PeriodSelect
                        {periods}
                        selected={current_ratios.map(|r| r.period.clone())}
                        on_change={on_ratio_period}
                    />
                }
            </MetricsCard>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::FinancialRatio;
    use rust_decimal_macros::dec;

    fn ratios(periods: &[&str]) -> Vec<PeriodRatios> {
        periods
            .iter()
            .map(|p| PeriodRatios {
                period: p.to_string(),
                ratios: vec![FinancialRatio::percent("Equity ratio", dec!(10.0))],
            })
            .collect()
    }

    #[test]
    fn test_ratio_period_selection() {
        let all = ratios(&["Q1 2025", "Q2 2025"]);
        assert_eq!(ratio_metrics(&all, Some("Q1 2025")).map(|r| r.period.as_str()), Some("Q1 2025"));
        assert_eq!(ratio_metrics(&all, None).map(|r| r.period.as_str()), Some("Q2 2025"));
        assert_eq!(ratio_metrics(&all, Some("Jan 2025")).map(|r| r.period.as_str()), Some("Q2 2025"));
        assert!(ratio_metrics(&[], Some("Q1 2025")).is_none());
    }

    #[test]
    fn test_trend_description() {
        let change = PeriodChange {
            period: "December".to_string(),
            previous_period: "November".to_string(),
            pct: dec!(6.3),
        };
        assert_eq!(
            trend_description(Some(&change), TimelineView::Monthly),
            format!("Latest {}: December", TimelineView::Monthly.period_noun())
        );
        assert_eq!(
            trend_description(None, TimelineView::Yearly),
            format!("All {} periods", TimelineView::Yearly.label().to_lowercase())
        );
    }
}
