//! Line layout of the banking statements, shared by every renderer.
//!
//! Expense lines carry a negative sign so a column reads top to bottom as a
//! running calculation.

use common::{BalanceSheet, ProfitLossStatement};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementLine {
    pub label: &'static str,
    /// One value per period, in the order the statements were given
    pub values: Vec<Decimal>,
    /// Derived subtotal rather than a reported position
    pub subtotal: bool,
}

fn line<T>(
    items: &[T],
    label: &'static str,
    subtotal: bool,
    value: fn(&T) -> Decimal,
) -> StatementLine {
    StatementLine {
        label,
        values: items.iter().map(value).collect(),
        subtotal,
    }
}

pub fn profit_and_loss_lines(statements: &[ProfitLossStatement]) -> Vec<StatementLine> {
    let l = |label: &'static str, subtotal: bool, value: fn(&ProfitLossStatement) -> Decimal| {
        line(statements, label, subtotal, value)
    };
    vec![
        l("Interest income", false, |s| s.interest_income),
        l("Interest expense", false, |s| -s.interest_expense),
        l("Net interest income", true, |s| s.net_interest_income()),
        l("Fee and commission income", false, |s| s.fee_income),
        l("Fee and commission expense", false, |s| -s.fee_expense),
        l("Net fee and commission income", true, |s| s.net_fee_income()),
        l("Gains on derivatives", false, |s| s.derivatives_gains),
        l("Credit loss expense", false, |s| -s.credit_loss_expense),
        l("Other income", false, |s| s.other_income),
        l("Net operating income", true, |s| s.net_operating_income()),
        l("Personnel expenses", false, |s| -s.personnel_expenses),
        l("Depreciation", false, |s| -s.depreciation),
        l("Other operating expenses", false, |s| -s.other_operating_expenses),
        l("Total operating expenses", true, |s| -s.total_operating_expenses()),
        l("Profit before tax", true, |s| s.profit_before_tax()),
        l("Income tax", false, |s| -s.tax_expense),
        l("Profit for the period", true, |s| s.profit_for_period()),
        l("Other comprehensive income", false, |s| s.other_comprehensive_income),
        l("Total comprehensive income", true, |s| s.total_comprehensive_income()),
    ]
}

pub fn balance_sheet_lines(sheets: &[BalanceSheet]) -> Vec<StatementLine> {
    let l = |label: &'static str, subtotal: bool, value: fn(&BalanceSheet) -> Decimal| {
        line(sheets, label, subtotal, value)
    };
    vec![
        l("Cash and central banks", false, |s| s.assets.cash_and_central_banks),
        l("Due from banks", false, |s| s.assets.due_from_banks),
        l("Derivatives", false, |s| s.assets.derivatives),
        l("Loans and overdrafts", false, |s| s.assets.loans_and_overdrafts),
        l("Debt securities", false, |s| s.assets.debt_securities),
        l("Other assets", false, |s| s.assets.other_assets),
        l("Total assets", true, |s| s.total_assets()),
        l("Derivative liabilities", false, |s| s.liabilities.derivatives_liability),
        l("Due to customers", false, |s| s.liabilities.due_to_customers),
        l("Due to financial institutions", false, |s| s.liabilities.due_to_financial_institutions),
        l("Other liabilities", false, |s| s.liabilities.other_liabilities),
        l("Provisions", false, |s| s.liabilities.provisions),
        l("Total liabilities", true, |s| s.total_liabilities()),
        l("Share capital", false, |s| s.share_capital),
        l("Reserve capital", false, |s| s.reserve_capital),
        l("Retained earnings", false, |s| s.retained_earnings),
        l("Reserves", false, |s| s.reserves),
        l("Total equity", true, |s| s.total_equity()),
        l("Total liabilities and equity", true, |s| s.total_liabilities() + s.total_equity()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::TimelineView;
    use model::PeriodDataStore;

    fn find_line<'a>(lines: &'a [StatementLine], label: &str) -> &'a StatementLine {
        lines
            .iter()
            .find(|l| l.label == label)
            .unwrap_or_else(|| panic!("missing line {label}"))
    }

    #[test]
    fn test_profit_and_loss_columns_add_up() {
        let store = PeriodDataStore::builtin();
        let statements = store.profit_and_loss(TimelineView::Quarterly);
        let lines = profit_and_loss_lines(statements);

        assert_eq!(lines.len(), 19);
        for line in &lines {
            assert_eq!(line.values.len(), statements.len());
        }

        let income = find_line(&lines, "Interest income");
        let expense = find_line(&lines, "Interest expense");
        let net = find_line(&lines, "Net interest income");
        assert!(net.subtotal);
        assert!(!income.subtotal);
        for i in 0..statements.len() {
            assert_eq!(income.values[i] + expense.values[i], net.values[i]);
        }

        let before_tax = find_line(&lines, "Profit before tax");
        let tax = find_line(&lines, "Income tax");
        let profit = find_line(&lines, "Profit for the period");
        for i in 0..statements.len() {
            assert_eq!(before_tax.values[i] + tax.values[i], profit.values[i]);
        }
    }

    #[test]
    fn test_balance_sheet_totals_match() {
        let store = PeriodDataStore::builtin();
        let sheets = store.balance_sheets(TimelineView::Yearly);
        let lines = balance_sheet_lines(sheets);

        let assets = find_line(&lines, "Total assets");
        let both = find_line(&lines, "Total liabilities and equity");
        assert_eq!(assets.values, both.values);
    }

    #[test]
    fn test_no_periods_keeps_labels() {
        let lines = profit_and_loss_lines(&[]);
        assert_eq!(lines.len(), 19);
        assert!(lines.iter().all(|l| l.values.is_empty()));
    }
}
