//! Record shapes held by the period data store.
//!
//! Subtotals of the banking statements are methods, not fields: they are
//! always derived from their constituent lines so a fixture can never carry a
//! total that disagrees with its parts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Generic financial performance for one period bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRecord {
    /// Period label, e.g. "January", "Q2 2024" or "2023"
    pub period: String,
    pub revenue: Decimal,
    /// Cost of goods sold
    pub cogs: Decimal,
    pub operating_expenses: Decimal,
    /// Signed; a loss-making period is negative
    pub net_income: Decimal,
}

impl PeriodRecord {
    pub fn new(
        period: impl Into<String>,
        revenue: Decimal,
        cogs: Decimal,
        operating_expenses: Decimal,
        net_income: Decimal,
    ) -> Self {
        Self {
            period: period.into(),
            revenue,
            cogs,
            operating_expenses,
            net_income,
        }
    }

    /// COGS plus operating expenses.
    pub fn total_expenses(&self) -> Decimal {
        self.cogs + self.operating_expenses
    }
}

/// Banking profit-and-loss statement for one period.
///
/// Expense lines are stored as non-negative magnitudes. `derivatives_gains`
/// and `other_comprehensive_income` are signed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLossStatement {
    pub period: String,
    pub interest_income: Decimal,
    pub interest_expense: Decimal,
    pub fee_income: Decimal,
    pub fee_expense: Decimal,
    pub derivatives_gains: Decimal,
    pub credit_loss_expense: Decimal,
    pub other_income: Decimal,
    pub personnel_expenses: Decimal,
    pub depreciation: Decimal,
    pub other_operating_expenses: Decimal,
    pub tax_expense: Decimal,
    pub other_comprehensive_income: Decimal,
}

impl ProfitLossStatement {
    pub fn net_interest_income(&self) -> Decimal {
        self.interest_income - self.interest_expense
    }

    pub fn net_fee_income(&self) -> Decimal {
        self.fee_income - self.fee_expense
    }

    pub fn net_operating_income(&self) -> Decimal {
        self.net_interest_income() + self.net_fee_income() + self.derivatives_gains
            - self.credit_loss_expense
            + self.other_income
    }

    pub fn total_operating_expenses(&self) -> Decimal {
        self.personnel_expenses + self.depreciation + self.other_operating_expenses
    }

    pub fn profit_before_tax(&self) -> Decimal {
        self.net_operating_income() - self.total_operating_expenses()
    }

    pub fn profit_for_period(&self) -> Decimal {
        self.profit_before_tax() - self.tax_expense
    }

    pub fn total_comprehensive_income(&self) -> Decimal {
        self.profit_for_period() + self.other_comprehensive_income
    }

    /// Expense lines that must never be negative, with their field names.
    pub fn magnitude_lines(&self) -> [(&'static str, Decimal); 10] {
        [
            ("interestIncome", self.interest_income),
            ("interestExpense", self.interest_expense),
            ("feeIncome", self.fee_income),
            ("feeExpense", self.fee_expense),
            ("creditLossExpense", self.credit_loss_expense),
            ("otherIncome", self.other_income),
            ("personnelExpenses", self.personnel_expenses),
            ("depreciation", self.depreciation),
            ("otherOperatingExpenses", self.other_operating_expenses),
            ("taxExpense", self.tax_expense),
        ]
    }
}

/// Asset side of a balance sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetPositions {
    pub cash_and_central_banks: Decimal,
    pub due_from_banks: Decimal,
    pub derivatives: Decimal,
    pub loans_and_overdrafts: Decimal,
    pub debt_securities: Decimal,
    pub other_assets: Decimal,
}

impl AssetPositions {
    pub fn total(&self) -> Decimal {
        self.cash_and_central_banks
            + self.due_from_banks
            + self.derivatives
            + self.loans_and_overdrafts
            + self.debt_securities
            + self.other_assets
    }
}

/// Liability side of a balance sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiabilityPositions {
    pub derivatives_liability: Decimal,
    pub due_to_customers: Decimal,
    pub due_to_financial_institutions: Decimal,
    pub other_liabilities: Decimal,
    pub provisions: Decimal,
}

impl LiabilityPositions {
    pub fn total(&self) -> Decimal {
        self.derivatives_liability
            + self.due_to_customers
            + self.due_to_financial_institutions
            + self.other_liabilities
            + self.provisions
    }
}

/// Balance sheet at the end of a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    pub period: String,
    #[serde(flatten)]
    pub assets: AssetPositions,
    #[serde(flatten)]
    pub liabilities: LiabilityPositions,
    pub share_capital: Decimal,
    pub reserve_capital: Decimal,
    pub retained_earnings: Decimal,
    pub reserves: Decimal,
}

impl BalanceSheet {
    /// Builds a sheet whose retained earnings are the balancing equity
    /// position, so `total_assets == total_liabilities + total_equity`.
    pub fn balanced(
        period: impl Into<String>,
        assets: AssetPositions,
        liabilities: LiabilityPositions,
        share_capital: Decimal,
        reserve_capital: Decimal,
        reserves: Decimal,
    ) -> Self {
        let retained_earnings =
            assets.total() - liabilities.total() - share_capital - reserve_capital - reserves;
        Self {
            period: period.into(),
            assets,
            liabilities,
            share_capital,
            reserve_capital,
            retained_earnings,
            reserves,
        }
    }

    pub fn total_assets(&self) -> Decimal {
        self.assets.total()
    }

    pub fn total_liabilities(&self) -> Decimal {
        self.liabilities.total()
    }

    pub fn total_equity(&self) -> Decimal {
        self.share_capital + self.reserve_capital + self.retained_earnings + self.reserves
    }

    /// Accounting identity: assets = liabilities + equity.
    pub fn is_balanced(&self) -> bool {
        self.total_assets() == self.total_liabilities() + self.total_equity()
    }

    /// Positions that must never be negative, with their field names.
    /// Retained earnings are the balancing position and are checked apart.
    pub fn magnitude_positions(&self) -> [(&'static str, Decimal); 14] {
        let a = &self.assets;
        let l = &self.liabilities;
        [
            ("cashAndCentralBanks", a.cash_and_central_banks),
            ("dueFromBanks", a.due_from_banks),
            ("derivatives", a.derivatives),
            ("loansAndOverdrafts", a.loans_and_overdrafts),
            ("debtSecurities", a.debt_securities),
            ("otherAssets", a.other_assets),
            ("derivativesLiability", l.derivatives_liability),
            ("dueToCustomers", l.due_to_customers),
            ("dueToFinancialInstitutions", l.due_to_financial_institutions),
            ("otherLiabilities", l.other_liabilities),
            ("provisions", l.provisions),
            ("shareCapital", self.share_capital),
            ("reserveCapital", self.reserve_capital),
            ("reserves", self.reserves),
        ]
    }
}

/// One operating expense category with its amount for the current quarter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategory {
    pub category: String,
    pub amount: Decimal,
}

/// Cash flow by activity for one period. Outflows are negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowRecord {
    pub period: String,
    pub operating: Decimal,
    pub investing: Decimal,
    pub financing: Decimal,
}

impl CashFlowRecord {
    pub fn net_cash_flow(&self) -> Decimal {
        self.operating + self.investing + self.financing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn statement() -> ProfitLossStatement {
        ProfitLossStatement {
            period: "Q1 2025".to_string(),
            interest_income: dec!(1000),
            interest_expense: dec!(400),
            fee_income: dec!(300),
            fee_expense: dec!(100),
            derivatives_gains: dec!(-50),
            credit_loss_expense: dec!(70),
            other_income: dec!(20),
            personnel_expenses: dec!(250),
            depreciation: dec!(40),
            other_operating_expenses: dec!(110),
            tax_expense: dec!(60),
            other_comprehensive_income: dec!(15),
        }
    }

    #[test]
    fn test_profit_loss_subtotals() {
        let pl = statement();
        assert_eq!(pl.net_interest_income(), dec!(600));
        assert_eq!(pl.net_fee_income(), dec!(200));
        // 600 + 200 - 50 - 70 + 20
        assert_eq!(pl.net_operating_income(), dec!(700));
        assert_eq!(pl.total_operating_expenses(), dec!(400));
        assert_eq!(pl.profit_before_tax(), dec!(300));
        assert_eq!(pl.profit_for_period(), dec!(240));
        assert_eq!(pl.total_comprehensive_income(), dec!(255));
    }

    #[test]
    fn test_balanced_sheet_derives_retained_earnings() {
        let sheet = BalanceSheet::balanced(
            "2024",
            AssetPositions {
                cash_and_central_banks: dec!(100),
                due_from_banks: dec!(50),
                derivatives: dec!(10),
                loans_and_overdrafts: dec!(700),
                debt_securities: dec!(120),
                other_assets: dec!(20),
            },
            LiabilityPositions {
                derivatives_liability: dec!(8),
                due_to_customers: dec!(780),
                due_to_financial_institutions: dec!(60),
                other_liabilities: dec!(12),
                provisions: dec!(5),
            },
            dec!(50),
            dec!(20),
            dec!(10),
        );
        assert_eq!(sheet.total_assets(), dec!(1000));
        assert_eq!(sheet.total_liabilities(), dec!(865));
        assert_eq!(sheet.retained_earnings, dec!(55));
        assert_eq!(sheet.total_equity(), dec!(135));
        assert!(sheet.is_balanced());
    }

    #[test]
    fn test_magnitude_positions_cover_every_position_but_retained_earnings() {
        let sheet = BalanceSheet::balanced(
            "2024",
            AssetPositions {
                loans_and_overdrafts: dec!(-5),
                ..Default::default()
            },
            LiabilityPositions {
                due_to_customers: dec!(3),
                ..Default::default()
            },
            dec!(1),
            dec!(0),
            dec!(0),
        );
        let positions = sheet.magnitude_positions();
        assert_eq!(positions.len(), 14);
        assert!(positions.iter().all(|(field, _)| *field != "retainedEarnings"));
        assert!(positions.contains(&("loansAndOverdrafts", dec!(-5))));
        assert!(positions.contains(&("dueToCustomers", dec!(3))));
        assert!(positions.contains(&("shareCapital", dec!(1))));
    }

    #[test]
    fn test_period_record_serializes_camel_case() {
        let record =
            PeriodRecord::new("Jan", dec!(450000), dec!(180000), dec!(120000), dec!(150000));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["operatingExpenses"], "120000");
        assert_eq!(json["netIncome"], "150000");
        assert_eq!(record.total_expenses(), dec!(300000));
    }

    #[test]
    fn test_cash_flow_net() {
        let flow = CashFlowRecord {
            period: "January".to_string(),
            operating: dec!(160000),
            investing: dec!(-30000),
            financing: dec!(-20000),
        };
        assert_eq!(flow.net_cash_flow(), dec!(110000));
    }
}
