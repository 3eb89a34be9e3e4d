use yew::prelude::*;

use crate::router::company_name;

const KPI_TILES: [(&str, &str); 3] = [
    ("Leads Generated", "fa-user-plus"),
    ("Conversion Rate", "fa-filter"),
    ("CAC", "fa-hand-holding-dollar"),
];

fn kpi_tiles() -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            { for KPI_TILES.iter().map(|(title, icon)| html! {
                <div class="stats shadow bg-base-100">
                    <div class="stat">
                        <div class="stat-figure text-secondary text-2xl"><i class={classes!("fas", *icon)}></i></div>
                        <div class="stat-title">{ *title }</div>
                        <div class="stat-value text-base-content/40">{"-"}</div>
                        <div class="stat-desc">{"No campaign data yet"}</div>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[function_component(MarketingPage)]
pub fn marketing_page() -> Html {
    html! {
        <div class="flex flex-col gap-6">
            <div>
                <h1 class="text-2xl font-bold">{"Marketing KPIs"}</h1>
                <p class="text-base-content/60">{"Marketing performance across all companies"}</p>
            </div>
            { kpi_tiles() }
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <p class="text-sm text-base-content/60">{"Marketing analytics and campaign performance"}</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CompanyProps {
    pub company_id: String,
}

#[function_component(MarketingCompanyPage)]
pub fn marketing_company_page(props: &CompanyProps) -> Html {
    let known = common::COMPANIES.iter().any(|(id, _)| *id == props.company_id);
    if !known {
        log::warn!("Marketing page requested for unknown company {}", props.company_id);
        return html! {
            <div class="alert alert-warning">
                <i class="fas fa-triangle-exclamation"></i>
                <span>{ format!("Company \"{}\" not found", props.company_id) }</span>
            </div>
        };
    }

    html! {
        <div class="flex flex-col gap-6">
            <div>
                <h1 class="text-2xl font-bold">{ format!("Marketing KPIs - {}", company_name(&props.company_id)) }</h1>
                <p class="text-base-content/60">{"Campaign performance for this company"}</p>
            </div>
            { kpi_tiles() }
        </div>
    }
}
