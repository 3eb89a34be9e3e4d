//! Common types shared between the dashboard front ends and the compute layer.
//! Record shapes, metric outputs and the small pieces of UI state live here so
//! the Yew app and the terminal reports render exactly the same structures.

mod auth;
mod format;
mod metrics;
mod navigation;
mod records;
mod settings;
mod timeline;

pub use auth::{Access, AlwaysAuthenticated, AuthProvider, StaticAuth, check_access};
pub use format::{format_currency, format_percent, format_signed_percent};
pub use metrics::{
    FieldShare, FinancialRatio, MetricsSummary, PercentRow, PerformanceRow, PerformanceTable,
    PerformanceTotals, RatioUnit,
};
pub use navigation::{COMPANIES, NavItem, NavSection, nav_sections};
pub use records::{
    AssetPositions, BalanceSheet, CashFlowRecord, ExpenseCategory, LiabilityPositions,
    PeriodRecord, ProfitLossStatement,
};
pub use settings::{MemorySettings, SIDEBAR_STATE_KEY, SettingsStore, SidebarState};
pub use timeline::{TimelineView, ViewSelector};
