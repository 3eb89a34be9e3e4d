use std::rc::Rc;

use common::TimelineView;
use compute::{company_snapshot, CompanySnapshot, DashboardSnapshot};
use model::PeriodDataStore;
use yew::prelude::*;

thread_local! {
    static STORE: Rc<PeriodDataStore> = Rc::new(PeriodDataStore::builtin());
}

/// Shared handle to the built-in period data.
pub fn store() -> Rc<PeriodDataStore> {
    STORE.with(Rc::clone)
}

/// Snapshot for `view`, rebuilt whenever the view changes.
#[hook]
pub fn use_dashboard_snapshot(view: TimelineView) -> Rc<DashboardSnapshot> {
    use_memo(view, |view| {
        log::debug!("Building dashboard snapshot for {}", view);
        DashboardSnapshot::build(&store(), *view)
    })
}

/// Company snapshot, `None` for an unknown company id.
#[hook]
pub fn use_company_snapshot(company_id: String) -> Rc<Option<CompanySnapshot>> {
    use_memo(company_id, |company_id| match company_snapshot(&store(), company_id) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            log::warn!("No data for company {}: {}", company_id, e);
            None
        }
    })
}
