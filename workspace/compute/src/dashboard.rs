use common::{
    BalanceSheet, MetricsSummary, PercentRow, PerformanceTable, PeriodRecord, ProfitLossStatement,
    TimelineView, ViewSelector,
};
use model::PeriodDataStore;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::breakdown::{BreakdownKind, field_amounts, to_percent_of_total};
use crate::error::{ComputeError, Result};
use crate::growth::{Metric, PeriodChange, latest_change};
use crate::ratios::{PeriodRatios, ratios_for_view};
use crate::summary::{performance_table, summarize};

/// Everything the dashboard shows for one timeline view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub view: TimelineView,
    pub records: Vec<PeriodRecord>,
    pub summary: MetricsSummary,
    pub performance: PerformanceTable,
    pub revenue_change: Option<PeriodChange>,
    pub profit_change: Option<PeriodChange>,
    pub income_mix: Vec<PercentRow>,
    pub expense_mix: Vec<PercentRow>,
    pub asset_mix: Vec<PercentRow>,
    pub liability_mix: Vec<PercentRow>,
    pub profit_and_loss: Vec<ProfitLossStatement>,
    pub balance_sheets: Vec<BalanceSheet>,
    pub ratios: Vec<PeriodRatios>,
}

impl DashboardSnapshot {
    #[instrument(skip(store))]
    pub fn build(store: &PeriodDataStore, view: TimelineView) -> Self {
        let records = store.performance(view);
        let statements = store.profit_and_loss(view);
        let sheets = store.balance_sheets(view);

        let snapshot = Self {
            view,
            records: records.to_vec(),
            summary: summarize(records),
            performance: performance_table(records),
            revenue_change: latest_change(records, Metric::Revenue),
            profit_change: latest_change(records, Metric::Profit),
            income_mix: to_percent_of_total(statements, BreakdownKind::Income.fields()),
            expense_mix: to_percent_of_total(statements, BreakdownKind::Expenses.fields()),
            asset_mix: to_percent_of_total(sheets, BreakdownKind::Assets.fields()),
            liability_mix: to_percent_of_total(sheets, BreakdownKind::Liabilities.fields()),
            profit_and_loss: statements.to_vec(),
            balance_sheets: sheets.to_vec(),
            ratios: ratios_for_view(store, view),
        };

        debug!(
            %view,
            records = snapshot.records.len(),
            statements = snapshot.profit_and_loss.len(),
            "Built dashboard snapshot"
        );
        snapshot
    }

    pub fn breakdown(&self, kind: BreakdownKind) -> &[PercentRow] {
        match kind {
            BreakdownKind::Income => &self.income_mix,
            BreakdownKind::Expenses => &self.expense_mix,
            BreakdownKind::Assets => &self.asset_mix,
            BreakdownKind::Liabilities => &self.liability_mix,
        }
    }

    /// Source amounts behind [`Self::breakdown`], row by row and field by field.
    pub fn breakdown_amounts(&self, kind: BreakdownKind) -> Vec<Vec<rust_decimal::Decimal>> {
        if kind.from_balance_sheet() {
            field_amounts(&self.balance_sheets, kind.fields())
        } else {
            field_amounts(&self.profit_and_loss, kind.fields())
        }
    }

    /// Revenue per period, in chronological order.
    pub fn revenue_trend(&self) -> Vec<(&str, rust_decimal::Decimal)> {
        self.records
            .iter()
            .map(|r| (r.period.as_str(), r.revenue))
            .collect()
    }
}

/// Summary and table of a single company.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySnapshot {
    pub company_id: String,
    pub records: Vec<PeriodRecord>,
    pub summary: MetricsSummary,
    pub performance: PerformanceTable,
    pub revenue_change: Option<PeriodChange>,
    pub profit_change: Option<PeriodChange>,
}

#[instrument(skip(store))]
pub fn company_snapshot(store: &PeriodDataStore, company_id: &str) -> Result<CompanySnapshot> {
    let records = store
        .company_performance(company_id)
        .map_err(|e| ComputeError::from(e).logged())?;

    Ok(CompanySnapshot {
        company_id: company_id.to_string(),
        records: records.to_vec(),
        summary: summarize(records),
        performance: performance_table(records),
        revenue_change: latest_change(records, Metric::Revenue),
        profit_change: latest_change(records, Metric::Profit),
    })
}

/// Dashboard state: the selected view and the snapshot derived from it.
#[derive(Debug)]
pub struct Dashboard<'a> {
    store: &'a PeriodDataStore,
    selector: ViewSelector,
    snapshot: DashboardSnapshot,
}

impl<'a> Dashboard<'a> {
    pub fn new(store: &'a PeriodDataStore) -> Self {
        let selector = ViewSelector::default();
        let snapshot = DashboardSnapshot::build(store, selector.current());
        Self {
            store,
            selector,
            snapshot,
        }
    }

    pub fn current_view(&self) -> TimelineView {
        self.selector.current()
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    /// Switches to `view` and recomputes the snapshot, even when the view
    /// did not change.
    pub fn select(&mut self, view: TimelineView) -> &DashboardSnapshot {
        let changed = self.selector.select(view);
        info!(%view, changed, "Timeline view selected");
        self.snapshot = DashboardSnapshot::build(self.store, view);
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::traced_store;
    use model::ModelError;

    #[test]
    fn test_dashboard_defaults_to_monthly() {
        let (store, _guard) = traced_store();
        let dashboard = Dashboard::new(&store);
        assert_eq!(dashboard.current_view(), TimelineView::Monthly);
        assert_eq!(dashboard.snapshot().records.len(), 12);
        assert_eq!(
            dashboard.snapshot().summary,
            summarize(store.performance(TimelineView::Monthly))
        );
    }

    #[test]
    fn test_select_recomputes_for_new_view() {
        let (store, _guard) = traced_store();
        let mut dashboard = Dashboard::new(&store);

        let snapshot = dashboard.select(TimelineView::Yearly);
        assert_eq!(snapshot.view, TimelineView::Yearly);
        assert_eq!(snapshot.records.len(), 5);
        assert_eq!(snapshot.income_mix.len(), 5);
        assert_eq!(snapshot.ratios.len(), 5);
        assert_eq!(dashboard.current_view(), TimelineView::Yearly);
    }

    #[test]
    fn test_selecting_same_view_gives_identical_snapshot() {
        let (store, _guard) = traced_store();
        let mut dashboard = Dashboard::new(&store);
        let first = dashboard.select(TimelineView::Quarterly).clone();
        let second = dashboard.select(TimelineView::Quarterly).clone();
        assert_eq!(first, second);
        assert_eq!(first, DashboardSnapshot::build(&store, TimelineView::Quarterly));
    }

    #[test]
    fn test_snapshot_changes_and_breakdowns() {
        let (store, _guard) = traced_store();
        let snapshot = DashboardSnapshot::build(&store, TimelineView::Monthly);

        let revenue = snapshot.revenue_change.as_ref().unwrap();
        assert_eq!(revenue.period, "December");
        assert_eq!(revenue.previous_period, "November");
        assert_eq!(revenue.pct.to_string(), "6.3");

        assert_eq!(snapshot.breakdown(BreakdownKind::Assets).len(), 6);
        assert_eq!(snapshot.breakdown(BreakdownKind::Assets)[0].shares.len(), 6);
        assert_eq!(snapshot.revenue_trend()[0], ("January", rust_decimal::Decimal::from(450_000)));
    }

    #[test]
    fn test_breakdown_amounts_line_up_with_rows() {
        let (store, _guard) = traced_store();
        let snapshot = DashboardSnapshot::build(&store, TimelineView::Yearly);
        for kind in BreakdownKind::ALL {
            let rows = snapshot.breakdown(kind);
            let amounts = snapshot.breakdown_amounts(kind);
            assert_eq!(amounts.len(), rows.len());
            assert!(amounts.iter().all(|row| row.len() == kind.fields().len()));
        }
        let assets = snapshot.breakdown_amounts(BreakdownKind::Assets);
        assert_eq!(assets[0][3], snapshot.balance_sheets[0].assets.loans_and_overdrafts);
    }

    #[test]
    fn test_company_snapshot() {
        let (store, _guard) = traced_store();
        let snapshot = company_snapshot(&store, "keyhole").unwrap();
        assert_eq!(snapshot.records.len(), 3);
        assert_eq!(snapshot.summary.total_revenue, rust_decimal::Decimal::from(520_000));
        assert_eq!(snapshot.performance.rows.len(), 3);
    }

    #[test]
    fn test_unknown_company_is_an_error() {
        let (store, _guard) = traced_store();
        let err = company_snapshot(&store, "acme").unwrap_err();
        assert!(matches!(
            err,
            ComputeError::Model(ModelError::UnknownCompany(ref id)) if id == "acme"
        ));
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let (store, _guard) = traced_store();
        let snapshot = DashboardSnapshot::build(&store, TimelineView::Quarterly);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["view"], "quarterly");
        assert!(json["summary"]["profitMarginPct"].is_string());
        assert!(json["incomeMix"].is_array());
    }
}
