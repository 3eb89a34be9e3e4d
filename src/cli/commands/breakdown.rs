use anyhow::Result;
use common::TimelineView;
use compute::{BreakdownKind, to_percent_of_total};
use model::PeriodDataStore;
use tracing::{debug, info, trace};

use crate::cli::OutputFormat;
use crate::report::render_breakdown;

pub fn breakdown(
    store: &PeriodDataStore,
    kind: BreakdownKind,
    view: TimelineView,
    format: OutputFormat,
) -> Result<String> {
    trace!("Entering breakdown command");
    info!(?kind, %view, "Building breakdown");

    let rows = if kind.from_balance_sheet() {
        to_percent_of_total(store.balance_sheets(view), kind.fields())
    } else {
        to_percent_of_total(store.profit_and_loss(view), kind.fields())
    };
    debug!(rows = rows.len(), "Breakdown rows computed");

    if let Some(out) = format.serialize(&rows)? {
        return Ok(out);
    }
    let title = format!("{} ({})", kind.title(), view.label());
    Ok(render_breakdown(&title, &rows))
}
