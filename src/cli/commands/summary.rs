use anyhow::{Context, Result};
use common::TimelineView;
use compute::{Dashboard, company_snapshot};
use model::PeriodDataStore;
use tracing::{debug, info, trace};

use crate::cli::OutputFormat;
use crate::config::KpiConfig;
use crate::report::{render_performance, render_summary};

pub fn summary(
    store: &PeriodDataStore,
    config: &KpiConfig,
    view: TimelineView,
    company: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    trace!("Entering summary command");
    let symbol = &config.currency_symbol;

    if let Some(company_id) = company {
        info!(company_id, "Building company summary");
        let snapshot = company_snapshot(store, company_id)
            .with_context(|| format!("Cannot report company '{company_id}'"))?;
        if let Some(out) = format.serialize(&snapshot)? {
            return Ok(out);
        }

        let title = format!("{company_id} performance");
        let mut out = render_summary(
            &title,
            &snapshot.summary,
            snapshot.revenue_change.as_ref(),
            snapshot.profit_change.as_ref(),
            symbol,
        );
        out.push('\n');
        out.push_str(&render_performance(&snapshot.performance, symbol));
        return Ok(out);
    }

    info!(%view, "Building dashboard summary");
    let mut dashboard = Dashboard::new(store);
    let snapshot = dashboard.select(view);
    debug!(records = snapshot.records.len(), "Snapshot ready");

    let payload = serde_json::json!({
        "view": snapshot.view,
        "summary": snapshot.summary,
        "performance": snapshot.performance,
        "revenueChange": snapshot.revenue_change,
        "profitChange": snapshot.profit_change,
    });
    if let Some(out) = format.serialize(&payload)? {
        return Ok(out);
    }

    let title = format!("Financial overview ({})", view.label());
    let mut out = render_summary(
        &title,
        &snapshot.summary,
        snapshot.revenue_change.as_ref(),
        snapshot.profit_change.as_ref(),
        symbol,
    );
    out.push('\n');
    out.push_str(&render_performance(&snapshot.performance, symbol));
    Ok(out)
}
