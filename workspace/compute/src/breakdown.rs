//! 100%-stacked breakdowns over named record fields.

use std::collections::BTreeMap;

use common::{
    BalanceSheet, CashFlowRecord, FieldShare, PercentRow, PeriodRecord, ProfitLossStatement,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::summary::{one_decimal, percent_of};

/// A record whose numeric fields can be looked up by their camelCase name.
pub trait FieldSource {
    /// Row label, normally the period.
    fn label(&self) -> &str;

    /// Value of `name`, `None` when the record has no such field.
    fn field(&self, name: &str) -> Option<Decimal>;
}

impl FieldSource for PeriodRecord {
    fn label(&self) -> &str {
        &self.period
    }

    fn field(&self, name: &str) -> Option<Decimal> {
        match name {
            "revenue" => Some(self.revenue),
            "cogs" => Some(self.cogs),
            "operatingExpenses" => Some(self.operating_expenses),
            "netIncome" => Some(self.net_income),
            "grossProfit" => Some(self.revenue - self.cogs),
            "totalExpenses" => Some(self.total_expenses()),
            _ => None,
        }
    }
}

impl FieldSource for ProfitLossStatement {
    fn label(&self) -> &str {
        &self.period
    }

    fn field(&self, name: &str) -> Option<Decimal> {
        match name {
            "interestIncome" => Some(self.interest_income),
            "interestExpense" => Some(self.interest_expense),
            "feeIncome" => Some(self.fee_income),
            "feeExpense" => Some(self.fee_expense),
            "derivativesGains" => Some(self.derivatives_gains),
            "creditLossExpense" => Some(self.credit_loss_expense),
            "otherIncome" => Some(self.other_income),
            "personnelExpenses" => Some(self.personnel_expenses),
            "depreciation" => Some(self.depreciation),
            "otherOperatingExpenses" => Some(self.other_operating_expenses),
            "taxExpense" => Some(self.tax_expense),
            "otherComprehensiveIncome" => Some(self.other_comprehensive_income),
            "netInterestIncome" => Some(self.net_interest_income()),
            "netFeeIncome" => Some(self.net_fee_income()),
            "netOperatingIncome" => Some(self.net_operating_income()),
            "totalOperatingExpenses" => Some(self.total_operating_expenses()),
            "profitBeforeTax" => Some(self.profit_before_tax()),
            "profitForPeriod" => Some(self.profit_for_period()),
            "totalComprehensiveIncome" => Some(self.total_comprehensive_income()),
            _ => None,
        }
    }
}

impl FieldSource for BalanceSheet {
    fn label(&self) -> &str {
        &self.period
    }

    fn field(&self, name: &str) -> Option<Decimal> {
        let a = &self.assets;
        let l = &self.liabilities;
        match name {
            "cashAndCentralBanks" => Some(a.cash_and_central_banks),
            "dueFromBanks" => Some(a.due_from_banks),
            "derivatives" => Some(a.derivatives),
            "loansAndOverdrafts" => Some(a.loans_and_overdrafts),
            "debtSecurities" => Some(a.debt_securities),
            "otherAssets" => Some(a.other_assets),
            "derivativesLiability" => Some(l.derivatives_liability),
            "dueToCustomers" => Some(l.due_to_customers),
            "dueToFinancialInstitutions" => Some(l.due_to_financial_institutions),
            "otherLiabilities" => Some(l.other_liabilities),
            "provisions" => Some(l.provisions),
            "shareCapital" => Some(self.share_capital),
            "reserveCapital" => Some(self.reserve_capital),
            "retainedEarnings" => Some(self.retained_earnings),
            "reserves" => Some(self.reserves),
            "totalAssets" => Some(self.total_assets()),
            "totalLiabilities" => Some(self.total_liabilities()),
            "totalEquity" => Some(self.total_equity()),
            _ => None,
        }
    }
}

impl FieldSource for CashFlowRecord {
    fn label(&self) -> &str {
        &self.period
    }

    fn field(&self, name: &str) -> Option<Decimal> {
        match name {
            "operating" => Some(self.operating),
            "investing" => Some(self.investing),
            "financing" => Some(self.financing),
            "netCashFlow" => Some(self.net_cash_flow()),
            _ => None,
        }
    }
}

/// Ad-hoc labelled record, used for user supplied series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub values: BTreeMap<String, Decimal>,
}

impl DataPoint {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with(mut self, field: impl Into<String>, value: Decimal) -> Self {
        self.values.insert(field.into(), value);
        self
    }
}

impl FieldSource for DataPoint {
    fn label(&self) -> &str {
        &self.label
    }

    fn field(&self, name: &str) -> Option<Decimal> {
        self.values.get(name).copied()
    }
}

/// Converts each record into the share of every named field in that record's
/// total, taking absolute values. Missing fields count as zero and a zero row
/// total yields `0.0` for every field. Shares carry one decimal and a non-zero
/// row always adds up to exactly `100.0`.
#[instrument(
    skip(records, field_names),
    fields(num_records = records.len(), num_fields = field_names.len())
)]
pub fn to_percent_of_total<R: FieldSource>(records: &[R], field_names: &[&str]) -> Vec<PercentRow> {
    let rows: Vec<PercentRow> = records
        .iter()
        .map(|record| {
            let values: Vec<Decimal> = field_names
                .iter()
                .map(|name| record.field(name).unwrap_or(Decimal::ZERO).abs())
                .collect();
            let sum: Decimal = values.iter().sum();
            trace!(label = record.label(), %sum, "Row total");

            let shares = field_names
                .iter()
                .zip(apportion_hundred(&values))
                .map(|(name, percent)| FieldShare {
                    field: name.to_string(),
                    percent,
                })
                .collect();

            PercentRow {
                label: record.label().to_string(),
                shares,
            }
        })
        .collect();

    debug!(rows = rows.len(), "Built percent-of-total rows");
    rows
}

/// Signed source amounts behind a breakdown, one row per record in the
/// order of `field_names`. Missing fields read as zero.
pub fn field_amounts<R: FieldSource>(records: &[R], field_names: &[&str]) -> Vec<Vec<Decimal>> {
    records
        .iter()
        .map(|record| {
            field_names
                .iter()
                .map(|name| record.field(name).unwrap_or(Decimal::ZERO))
                .collect()
        })
        .collect()
}

/// Splits 100.0 across `values` in tenths using the largest remainder method.
/// Ties go to the earlier value.
fn apportion_hundred(values: &[Decimal]) -> Vec<Decimal> {
    let sum: Decimal = values.iter().sum();
    if sum.is_zero() {
        return values.iter().map(|_| one_decimal(Decimal::ZERO)).collect();
    }

    let whole = Decimal::from(1000);
    let exact: Vec<Decimal> = values.iter().map(|v| v * whole / sum).collect();
    let mut tenths: Vec<Decimal> = exact.iter().map(|t| t.floor()).collect();

    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| (exact[b] - tenths[b]).cmp(&(exact[a] - tenths[a])));

    let mut missing = whole - tenths.iter().sum::<Decimal>();
    for index in order {
        if missing <= Decimal::ZERO {
            break;
        }
        tenths[index] += Decimal::ONE;
        missing -= Decimal::ONE;
    }

    tenths
        .into_iter()
        .map(|t| one_decimal(t / Decimal::TEN))
        .collect()
}

/// Field sets of the banking breakdown charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakdownKind {
    Income,
    Expenses,
    Assets,
    Liabilities,
}

pub const INCOME_MIX: &[&str] = &[
    "netInterestIncome",
    "netFeeIncome",
    "derivativesGains",
    "otherIncome",
];

pub const EXPENSE_MIX: &[&str] = &[
    "personnelExpenses",
    "depreciation",
    "otherOperatingExpenses",
    "creditLossExpense",
    "taxExpense",
];

pub const ASSET_MIX: &[&str] = &[
    "cashAndCentralBanks",
    "dueFromBanks",
    "derivatives",
    "loansAndOverdrafts",
    "debtSecurities",
    "otherAssets",
];

pub const LIABILITY_MIX: &[&str] = &[
    "derivativesLiability",
    "dueToCustomers",
    "dueToFinancialInstitutions",
    "otherLiabilities",
    "provisions",
];

impl BreakdownKind {
    pub const ALL: [BreakdownKind; 4] = [
        BreakdownKind::Income,
        BreakdownKind::Expenses,
        BreakdownKind::Assets,
        BreakdownKind::Liabilities,
    ];

    pub fn fields(self) -> &'static [&'static str] {
        match self {
            BreakdownKind::Income => INCOME_MIX,
            BreakdownKind::Expenses => EXPENSE_MIX,
            BreakdownKind::Assets => ASSET_MIX,
            BreakdownKind::Liabilities => LIABILITY_MIX,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BreakdownKind::Income => "Income Structure",
            BreakdownKind::Expenses => "Expense Structure",
            BreakdownKind::Assets => "Asset Structure",
            BreakdownKind::Liabilities => "Liability Structure",
        }
    }

    /// Whether the fields come from the balance sheet rather than the P&L.
    pub fn from_balance_sheet(self) -> bool {
        matches!(self, BreakdownKind::Assets | BreakdownKind::Liabilities)
    }
}

/// Human readable label for a camelCase field name.
pub fn field_label(name: &str) -> &str {
    match name {
        "netInterestIncome" => "Net interest income",
        "netFeeIncome" => "Net fee and commission income",
        "derivativesGains" => "Gains on derivatives",
        "otherIncome" => "Other income",
        "personnelExpenses" => "Personnel expenses",
        "depreciation" => "Depreciation",
        "otherOperatingExpenses" => "Other operating expenses",
        "creditLossExpense" => "Credit loss expense",
        "taxExpense" => "Income tax",
        "cashAndCentralBanks" => "Cash and central banks",
        "dueFromBanks" => "Due from banks",
        "derivatives" => "Derivatives",
        "loansAndOverdrafts" => "Loans and overdrafts",
        "debtSecurities" => "Debt securities",
        "otherAssets" => "Other assets",
        "derivativesLiability" => "Derivative liabilities",
        "dueToCustomers" => "Due to customers",
        "dueToFinancialInstitutions" => "Due to financial institutions",
        "otherLiabilities" => "Other liabilities",
        "provisions" => "Provisions",
        "revenue" => "Revenue",
        "cogs" => "Cost of goods sold",
        "operatingExpenses" => "Operating expenses",
        "netIncome" => "Net income",
        other => other,
    }
}

/// Share of each expense category in the category total.
pub fn expense_shares(categories: &[common::ExpenseCategory]) -> Vec<FieldShare> {
    let total: Decimal = categories.iter().map(|c| c.amount).sum();
    categories
        .iter()
        .map(|c| FieldShare {
            field: c.category.clone(),
            percent: percent_of(c.amount, total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::TimelineView;
    use model::PeriodDataStore;
    use rust_decimal_macros::dec;

    fn assert_sums_to_hundred(row: &PercentRow) {
        let drift = (row.total() - dec!(100)).abs();
        assert!(drift <= dec!(0.1), "{} sums to {}", row.label, row.total());
    }

    #[test]
    fn test_two_field_row() {
        let rows = to_percent_of_total(
            &[DataPoint::new("Q1").with("a", dec!(30)).with("b", dec!(70))],
            &["a", "b"],
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "Q1");
        assert_eq!(rows[0].get("a").unwrap().to_string(), "30.0");
        assert_eq!(rows[0].get("b").unwrap().to_string(), "70.0");
    }

    #[test]
    fn test_zero_row_yields_zero_shares() {
        let rows = to_percent_of_total(
            &[DataPoint::new("Q2").with("a", dec!(0)).with("b", dec!(0))],
            &["a", "b"],
        );
        assert_eq!(rows[0].get("a").unwrap().to_string(), "0.0");
        assert_eq!(rows[0].get("b").unwrap().to_string(), "0.0");
    }

    #[test]
    fn test_negative_values_use_magnitude() {
        let rows = to_percent_of_total(
            &[DataPoint::new("Q3").with("gain", dec!(-25)).with("fees", dec!(75))],
            &["gain", "fees"],
        );
        assert_eq!(rows[0].get("gain"), Some(dec!(25.0)));
        assert_eq!(rows[0].get("fees"), Some(dec!(75.0)));
    }

    #[test]
    fn test_six_equal_fields_sum_to_hundred() {
        let point = (1..=6).fold(DataPoint::new("H1"), |p, i| p.with(format!("f{i}"), dec!(1)));
        let fields = ["f1", "f2", "f3", "f4", "f5", "f6"];
        let rows = to_percent_of_total(&[point], &fields);
        let percents: Vec<String> = rows[0].shares.iter().map(|s| s.percent.to_string()).collect();
        assert_eq!(percents, vec!["16.7", "16.7", "16.7", "16.7", "16.6", "16.6"]);
        assert_eq!(rows[0].total(), dec!(100.0));
    }

    #[test]
    fn test_largest_remainder_gets_the_extra_tenth() {
        let rows = to_percent_of_total(
            &[DataPoint::new("Q1").with("a", dec!(1)).with("b", dec!(1)).with("c", dec!(1))],
            &["a", "b", "c"],
        );
        assert_eq!(rows[0].get("a"), Some(dec!(33.4)));
        assert_eq!(rows[0].get("b"), Some(dec!(33.3)));
        assert_eq!(rows[0].get("c"), Some(dec!(33.3)));

        let rows = to_percent_of_total(
            &[DataPoint::new("Q2").with("a", dec!(1)).with("b", dec!(2))],
            &["a", "b"],
        );
        assert_eq!(rows[0].get("a"), Some(dec!(33.3)));
        assert_eq!(rows[0].get("b"), Some(dec!(66.7)));
    }

    #[test]
    fn test_missing_field_counts_as_zero() {
        let rows = to_percent_of_total(
            &[DataPoint::new("Q4").with("a", dec!(5))],
            &["a", "missing"],
        );
        assert_eq!(rows[0].get("a"), Some(dec!(100.0)));
        assert_eq!(rows[0].get("missing"), Some(dec!(0.0)));
    }

    #[test]
    fn test_preserves_record_and_field_order() {
        let points = vec![
            DataPoint::new("first").with("x", dec!(1)).with("y", dec!(3)),
            DataPoint::new("second").with("x", dec!(1)).with("y", dec!(1)),
        ];
        let rows = to_percent_of_total(&points, &["y", "x"]);
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
        let fields: Vec<_> = rows[0].shares.iter().map(|s| s.field.as_str()).collect();
        assert_eq!(fields, vec!["y", "x"]);
        assert_eq!(rows[0].get("y"), Some(dec!(75.0)));
    }

    #[test]
    fn test_identical_input_gives_identical_output() {
        let store = PeriodDataStore::builtin();
        let statements = store.profit_and_loss(TimelineView::Quarterly);
        let first = to_percent_of_total(statements, INCOME_MIX);
        let second = to_percent_of_total(statements, INCOME_MIX);
        assert_eq!(first, second);
    }

    #[test]
    fn test_banking_breakdowns_stay_within_bounds() {
        let store = PeriodDataStore::builtin();
        for view in TimelineView::ALL {
            let statements = store.profit_and_loss(view);
            let sheets = store.balance_sheets(view);
            for kind in BreakdownKind::ALL {
                let rows = if kind.from_balance_sheet() {
                    to_percent_of_total(sheets, kind.fields())
                } else {
                    to_percent_of_total(statements, kind.fields())
                };
                for row in &rows {
                    for share in &row.shares {
                        assert!(share.percent >= Decimal::ZERO && share.percent <= dec!(100));
                    }
                    assert_sums_to_hundred(row);
                }
            }
        }
    }

    #[test]
    fn test_expense_shares_of_builtin_categories() {
        let store = PeriodDataStore::builtin();
        let shares = expense_shares(store.expense_breakdown());
        let percents: Vec<String> = shares.iter().map(|s| s.percent.to_string()).collect();
        assert_eq!(percents, vec!["45.0", "20.0", "15.0", "10.0", "10.0"]);
    }

    #[test]
    fn test_field_amounts_follow_percent_rows() {
        let points = vec![
            DataPoint::new("Q1").with("gain", dec!(-25)).with("fees", dec!(75)),
            DataPoint::new("Q2").with("fees", dec!(10)),
        ];
        let amounts = field_amounts(&points, &["gain", "fees"]);
        assert_eq!(amounts, vec![vec![dec!(-25), dec!(75)], vec![dec!(0), dec!(10)]]);
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(field_label("dueToCustomers"), "Due to customers");
        assert_eq!(field_label("unknownField"), "unknownField");
    }
}
