use anyhow::{Context, Result};
use common::TimelineView;
use model::PeriodDataStore;
use tracing::{error, info};

pub fn validate(store: &PeriodDataStore) -> Result<String> {
    info!("Validating period data store");
    if let Err(e) = store.validate() {
        error!("Validation failed: {}", e);
        return Err(e).context("Period data is inconsistent");
    }

    let mut lines = vec!["Period data is consistent".to_string()];
    for view in TimelineView::ALL {
        lines.push(format!(
            "  {:<10}{} performance records, {} statements, {} balance sheets",
            view.as_str(),
            store.performance(view).len(),
            store.profit_and_loss(view).len(),
            store.balance_sheets(view).len(),
        ));
    }
    lines.push(format!("  {:<10}{}", "companies", store.companies().count()));
    Ok(lines.join("\n"))
}
