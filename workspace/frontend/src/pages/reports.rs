use common::{nav_sections, TimelineView};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::tables::FinancialPerformanceTable;
use crate::data::use_dashboard_snapshot;
use crate::settings::get_settings;
use crate::Route;

/// Granularity a report id covers: `monthly-*`, `q*` or `annual-*`.
pub fn report_view(report_id: &str) -> Option<TimelineView> {
    let id = report_id.to_lowercase();
    if id.starts_with("monthly") {
        Some(TimelineView::Monthly)
    } else if id.starts_with('q') {
        Some(TimelineView::Quarterly)
    } else if id.starts_with("annual") || id.starts_with("yearly") {
        Some(TimelineView::Yearly)
    } else {
        None
    }
}

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let reports: Vec<_> = nav_sections()
        .into_iter()
        .filter(|section| section.url == "/reports")
        .flat_map(|section| section.items)
        .filter(|item| item.url != "/reports")
        .collect();

    html! {
        <div class="flex flex-col gap-6">
            <div>
                <h1 class="text-2xl font-bold">{"Reports Overview"}</h1>
                <p class="text-base-content/60">{"Generate and view company reports"}</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                { for reports.into_iter().filter_map(|item| {
                    let route = Route::recognize(&item.url)?;
                    Some(html! {
                        <Link<Route> to={route} classes="card bg-base-100 shadow hover:shadow-lg transition-shadow">
                            <div class="card-body">
                                <h2 class="card-title"><i class="fas fa-file-lines text-primary"></i>{ item.title }</h2>
                                <p class="text-sm text-base-content/60">{ item.url }</p>
                            </div>
                        </Link<Route>>
                    })
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewerProps {
    pub report_id: String,
}

#[function_component(ReportViewerPage)]
pub fn report_viewer_page(props: &ViewerProps) -> Html {
    let view = report_view(&props.report_id);
    let snapshot = use_dashboard_snapshot(view.unwrap_or_default());
    let symbol = get_settings().currency_symbol;

    html! {
        <div class="flex flex-col gap-6">
            <h1 class="text-2xl font-bold">{ format!("Report Viewer - {}", props.report_id) }</h1>
            if view.is_some() {
                <FinancialPerformanceTable table={snapshot.performance.clone()} currency_symbol={symbol} />
            } else {
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <p class="text-sm text-base-content/60">
                            { format!("No report content for report ID: {}", props.report_id) }
                        </p>
                    </div>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_view() {
        assert_eq!(report_view("monthly-2024"), Some(TimelineView::Monthly));
        assert_eq!(report_view("q4-2024"), Some(TimelineView::Quarterly));
        assert_eq!(report_view("Annual-2023"), Some(TimelineView::Yearly));
        assert_eq!(report_view("board-pack"), None);
    }

    #[test]
    fn test_sidebar_reports_have_views() {
        for section in nav_sections().into_iter().filter(|s| s.url == "/reports") {
            for item in section.items.into_iter().filter(|i| i.url != "/reports") {
                let id = item.url.trim_start_matches("/reports/");
                assert!(report_view(id).is_some(), "{} has no view", id);
            }
        }
    }
}
