//! Sidebar navigation table.

use serde::Serialize;

/// Companies with their own finance and marketing pages, as `(id, name)`.
pub const COMPANIES: [(&str, &str); 3] = [
    ("keyhole", "Keyhole"),
    ("payproff", "Payproff"),
    ("intercode", "Intercode"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavSection {
    pub title: String,
    pub url: String,
    pub items: Vec<NavItem>,
}

fn item(title: &str, url: impl Into<String>) -> NavItem {
    NavItem {
        title: title.to_string(),
        url: url.into(),
    }
}

fn company_section(title: &str, base: &str) -> NavSection {
    let mut items = vec![item("Overview", base)];
    items.extend(
        COMPANIES
            .iter()
            .map(|(id, name)| item(name, format!("{base}/{id}"))),
    );
    NavSection {
        title: title.to_string(),
        url: base.to_string(),
        items,
    }
}

/// Sections shown in the sidebar, in display order.
pub fn nav_sections() -> Vec<NavSection> {
    vec![
        company_section("Finance", "/finance"),
        company_section("Marketing", "/marketing"),
        NavSection {
            title: "Reports".to_string(),
            url: "/reports".to_string(),
            items: vec![
                item("View All", "/reports"),
                item("Monthly Report", "/reports/monthly-2024"),
                item("Quarterly Report", "/reports/q4-2024"),
            ],
        },
    ]
}
