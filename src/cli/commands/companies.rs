use anyhow::Result;
use common::COMPANIES;
use model::PeriodDataStore;
use tracing::debug;

/// One line per company: id and display name.
pub fn companies(store: &PeriodDataStore) -> Result<String> {
    let lines: Vec<String> = store
        .companies()
        .map(|id| {
            let name = COMPANIES
                .iter()
                .find(|(known, _)| *known == id)
                .map(|(_, name)| *name)
                .unwrap_or(id);
            format!("{id:<12}{name}")
        })
        .collect();

    debug!(count = lines.len(), "Listed companies");
    Ok(lines.join("\n"))
}
