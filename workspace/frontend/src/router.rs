use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::Guard;
use crate::components::layout::Layout;
use crate::pages::{
    finance::FinancePage, finance_company::FinanceCompanyPage, home::HomePage, login::LoginPage,
    marketing::{MarketingCompanyPage, MarketingPage}, reports::{ReportViewerPage, ReportsPage},
    settings::SettingsPage,
};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Home,
    #[at("/finance")]
    Finance,
    #[at("/finance/:company_id")]
    FinanceCompany { company_id: String },
    #[at("/marketing")]
    Marketing,
    #[at("/marketing/:company_id")]
    MarketingCompany { company_id: String },
    #[at("/reports")]
    Reports,
    #[at("/reports/:report_id")]
    ReportViewer { report_id: String },
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Every page except the login page requires authentication.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Page title shown in the navbar.
    pub fn title(&self) -> String {
        match self {
            Route::Login => "Sign In".to_string(),
            Route::Home => "Dashboard".to_string(),
            Route::Finance => "Finance KPIs".to_string(),
            Route::FinanceCompany { company_id } => format!("Finance KPIs - {}", company_name(company_id)),
            Route::Marketing => "Marketing KPIs".to_string(),
            Route::MarketingCompany { company_id } => {
                format!("Marketing KPIs - {}", company_name(company_id))
            }
            Route::Reports => "Reports".to_string(),
            Route::ReportViewer { report_id } => format!("Report {}", report_id),
            Route::Settings => "Settings".to_string(),
            Route::NotFound => "404".to_string(),
        }
    }

    /// Trail of `(label, route)` pairs leading to this route.
    pub fn breadcrumbs(&self) -> Vec<(String, Route)> {
        let home = ("Dashboard".to_string(), Route::Home);
        match self {
            Route::Home | Route::Login => vec![home],
            Route::Finance => vec![home, ("Finance".to_string(), Route::Finance)],
            Route::FinanceCompany { company_id } => vec![
                home,
                ("Finance".to_string(), Route::Finance),
                (company_name(company_id), self.clone()),
            ],
            Route::Marketing => vec![home, ("Marketing KPIs".to_string(), Route::Marketing)],
            Route::MarketingCompany { company_id } => vec![
                home,
                ("Marketing KPIs".to_string(), Route::Marketing),
                (company_name(company_id), self.clone()),
            ],
            Route::Reports => vec![home, ("Reports".to_string(), Route::Reports)],
            Route::ReportViewer { report_id } => vec![
                home,
                ("Reports".to_string(), Route::Reports),
                (format!("Report {}", report_id), self.clone()),
            ],
            Route::Settings => vec![home, ("Settings".to_string(), Route::Settings)],
            Route::NotFound => vec![home, ("404".to_string(), Route::NotFound)],
        }
    }
}

/// Display name for a company id, falling back to the id itself.
pub fn company_name(company_id: &str) -> String {
    common::COMPANIES
        .iter()
        .find(|(id, _)| *id == company_id)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| company_id.to_string())
}

fn page(route: &Route, content: Html) -> Html {
    html! {
        <Guard route={route.clone()}>
            <Layout title={route.title()}>{ content }</Layout>
        </Guard>
    }
}

pub fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    match &route {
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <Guard route={route.clone()}><LoginPage /></Guard> }
        }
        Route::Home => {
            log::trace!("Rendering Home page");
            page(&route, html! { <HomePage /> })
        }
        Route::Finance => {
            log::trace!("Rendering Finance page");
            page(&route, html! { <FinancePage /> })
        }
        Route::FinanceCompany { company_id } => {
            log::trace!("Rendering Finance page for company: {}", company_id);
            page(&route, html! { <FinanceCompanyPage company_id={company_id.clone()} /> })
        }
        Route::Marketing => {
            log::trace!("Rendering Marketing page");
            page(&route, html! { <MarketingPage /> })
        }
        Route::MarketingCompany { company_id } => {
            log::trace!("Rendering Marketing page for company: {}", company_id);
            page(&route, html! { <MarketingCompanyPage company_id={company_id.clone()} /> })
        }
        Route::Reports => {
            log::trace!("Rendering Reports page");
            page(&route, html! { <ReportsPage /> })
        }
        Route::ReportViewer { report_id } => {
            log::trace!("Rendering Report Viewer for: {}", report_id);
            page(&route, html! { <ReportViewerPage report_id={report_id.clone()} /> })
        }
        Route::Settings => {
            log::trace!("Rendering Settings page");
            page(&route, html! { <SettingsPage /> })
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            page(&route, html! { <h1 class="text-2xl font-bold">{"404 Not Found"}</h1> })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(
            Route::recognize("/finance/keyhole"),
            Some(Route::FinanceCompany {
                company_id: "keyhole".to_string()
            })
        );
        assert_eq!(
            Route::recognize("/reports/q4-2024"),
            Some(Route::ReportViewer {
                report_id: "q4-2024".to_string()
            })
        );
        assert!(matches!(
            Route::recognize("/nowhere/at/all"),
            None | Some(Route::NotFound)
        ));
    }

    #[test]
    fn test_only_login_is_public() {
        assert!(!Route::Login.is_protected());
        assert!(Route::Home.is_protected());
        assert!(Route::Settings.is_protected());
        assert!(Route::NotFound.is_protected());
    }

    #[test]
    fn test_sidebar_urls_are_routable() {
        for section in common::nav_sections() {
            for url in std::iter::once(section.url).chain(section.items.into_iter().map(|i| i.url)) {
                let route = Route::recognize(&url);
                assert!(
                    route.as_ref().is_some_and(|r| *r != Route::NotFound),
                    "{} is not routable",
                    url
                );
            }
        }
    }

    #[test]
    fn test_breadcrumbs() {
        let route = Route::FinanceCompany {
            company_id: "payproff".to_string(),
        };
        let labels: Vec<String> = route.breadcrumbs().into_iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Dashboard", "Finance", "Payproff"]);
        assert_eq!(route.title(), "Finance KPIs - Payproff");
        assert_eq!(company_name("unknown"), "unknown");
    }
}
