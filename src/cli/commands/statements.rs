use anyhow::Result;
use common::TimelineView;
use compute::ratios_for_view;
use model::PeriodDataStore;
use tracing::{info, trace};

use crate::cli::OutputFormat;
use crate::config::KpiConfig;
use crate::report::{render_balance_sheets, render_profit_and_loss, render_ratios};

pub fn statements(
    store: &PeriodDataStore,
    config: &KpiConfig,
    view: TimelineView,
    format: OutputFormat,
) -> Result<String> {
    trace!("Entering statements command");
    info!(%view, "Building banking statements");

    let profit_and_loss = store.profit_and_loss(view);
    let balance_sheets = store.balance_sheets(view);
    let ratios = ratios_for_view(store, view);

    let payload = serde_json::json!({
        "view": view,
        "profitAndLoss": profit_and_loss,
        "balanceSheets": balance_sheets,
        "ratios": ratios,
    });
    if let Some(out) = format.serialize(&payload)? {
        return Ok(out);
    }

    let symbol = &config.currency_symbol;
    Ok([
        render_profit_and_loss(profit_and_loss, symbol),
        render_balance_sheets(balance_sheets, symbol),
        render_ratios(&ratios),
    ]
    .join("\n"))
}
