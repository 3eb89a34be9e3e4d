//! Metrics aggregation over period data.
//!
//! Every function here is pure: it reads records and returns new values. The
//! [`Dashboard`] type ties the aggregations to the selected timeline view.

pub mod breakdown;
pub mod dashboard;
pub mod error;
pub mod growth;
pub mod ratios;
pub mod statements;
pub mod summary;

pub use breakdown::{
    BreakdownKind, DataPoint, FieldSource, expense_shares, field_amounts, field_label,
    to_percent_of_total,
};
pub use dashboard::{CompanySnapshot, Dashboard, DashboardSnapshot, company_snapshot};
pub use error::{ComputeError, Result};
pub use growth::{Metric, PeriodChange, growth_pct, latest_change};
pub use ratios::{PeriodRatios, banking_ratios, ratios_for_view};
pub use statements::{StatementLine, balance_sheet_lines, profit_and_loss_lines};
pub use summary::{gross_profit, percent_of, performance_table, profit_margin_of, summarize};

#[cfg(test)]
mod test_utils;
