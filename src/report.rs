//! Plain text rendering of dashboard data for the terminal.

use std::fmt::Write;

use common::{
    BalanceSheet, FieldShare, MetricsSummary, PercentRow, PerformanceTable, ProfitLossStatement,
    format_currency, format_percent, format_signed_percent,
};
use compute::{
    PeriodChange, PeriodRatios, StatementLine, balance_sheet_lines, field_label,
    profit_and_loss_lines,
};
use rust_decimal::Decimal;

const LABEL_WIDTH: usize = 34;
const COLUMN_WIDTH: usize = 14;

/// Statistic headers: total revenue, expenses, profit and margin.
pub fn render_summary(
    title: &str,
    summary: &MetricsSummary,
    revenue_change: Option<&PeriodChange>,
    profit_change: Option<&PeriodChange>,
    symbol: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.len()));
    let revenue = format_currency(summary.total_revenue, symbol);
    let expenses = format_currency(summary.total_expenses, symbol);
    let profit = format_currency(summary.total_profit, symbol);
    stat_line(&mut out, "Total Revenue", &revenue, revenue_change);
    stat_line(&mut out, "Total Expenses", &expenses, None);
    stat_line(&mut out, "Net Profit", &profit, profit_change);
    stat_line(&mut out, "Profit Margin", &format_percent(summary.profit_margin_pct), None);
    out
}

fn stat_line(out: &mut String, label: &str, value: &str, change: Option<&PeriodChange>) {
    let _ = write!(out, "{label:<16}{value:>16}");
    if let Some(change) = change {
        let _ = write!(
            out,
            "  {} vs {}",
            format_signed_percent(change.pct),
            change.previous_period
        );
    }
    out.push('\n');
}

/// Financial performance table with its totals row.
pub fn render_performance(table: &PerformanceTable, symbol: &str) -> String {
    let mut out = String::new();
    let headers = ["Period", "Revenue", "COGS", "Gross Profit", "OpEx", "Net Income", "Margin"];
    let _ = write!(out, "{:<12}", headers[0]);
    for header in &headers[1..] {
        let _ = write!(out, "{header:>COLUMN_WIDTH$}");
    }
    out.push('\n');

    let money = |value: Decimal| format_currency(value, symbol);
    for row in &table.rows {
        let _ = writeln!(
            out,
            "{:<12}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}",
            row.period,
            money(row.revenue),
            money(row.cogs),
            money(row.gross_profit),
            money(row.operating_expenses),
            money(row.net_income),
            format_percent(row.profit_margin_pct),
            w = COLUMN_WIDTH,
        );
    }

    let totals = &table.totals;
    let _ = writeln!(
        out,
        "{:<12}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}",
        "Total",
        money(totals.revenue),
        money(totals.cogs),
        money(totals.gross_profit),
        money(totals.operating_expenses),
        money(totals.net_income),
        format_percent(totals.profit_margin_pct),
        w = COLUMN_WIDTH,
    );
    out
}

/// One block per period listing each field's share.
pub fn render_breakdown(title: &str, rows: &[PercentRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    for row in rows {
        let _ = writeln!(out, "{}", row.label);
        for FieldShare { field, percent } in &row.shares {
            let _ = writeln!(
                out,
                "  {:<LABEL_WIDTH$}{:>8}",
                field_label(field),
                format_percent(*percent)
            );
        }
    }
    out
}

/// Statement lines as rows, periods as columns.
fn render_columns(title: &str, periods: &[&str], lines: &[StatementLine], symbol: &str) -> String {
    let mut out = String::new();
    let _ = write!(out, "{title:<LABEL_WIDTH$}");
    for period in periods {
        let _ = write!(out, "{period:>COLUMN_WIDTH$}");
    }
    out.push('\n');

    for line in lines {
        let _ = write!(out, "{:<LABEL_WIDTH$}", line.label);
        for value in &line.values {
            let _ = write!(out, "{:>COLUMN_WIDTH$}", format_currency(*value, symbol));
        }
        out.push('\n');
    }
    out
}

/// Profit and loss statements with derived subtotals.
pub fn render_profit_and_loss(statements: &[ProfitLossStatement], symbol: &str) -> String {
    let periods: Vec<&str> = statements.iter().map(|s| s.period.as_str()).collect();
    render_columns("Profit and Loss", &periods, &profit_and_loss_lines(statements), symbol)
}

pub fn render_balance_sheets(sheets: &[BalanceSheet], symbol: &str) -> String {
    let periods: Vec<&str> = sheets.iter().map(|s| s.period.as_str()).collect();
    render_columns("Balance Sheet", &periods, &balance_sheet_lines(sheets), symbol)
}

/// Ratios card, one line per ratio with a column per period.
pub fn render_ratios(ratios: &[PeriodRatios]) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<LABEL_WIDTH$}", "Financial Ratios");
    for period in ratios {
        let _ = write!(out, "{:>COLUMN_WIDTH$}", period.period);
    }
    out.push('\n');

    let Some(first) = ratios.first() else {
        return out;
    };
    for ratio in &first.ratios {
        let _ = write!(out, "{:<LABEL_WIDTH$}", ratio.name);
        for period in ratios {
            let value = period
                .get(&ratio.name)
                .map(|r| r.display_value())
                .unwrap_or_else(|| "-".to_string());
            let _ = write!(out, "{value:>COLUMN_WIDTH$}");
        }
        out.push('\n');
    }
    out
}
