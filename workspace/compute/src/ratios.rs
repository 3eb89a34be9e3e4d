//! Banking ratios derived from a matching P&L and balance sheet.
//!
//! Ratios are computed for the period as reported; flows are not annualized,
//! so monthly and quarterly returns read smaller than yearly ones.

use common::{BalanceSheet, FinancialRatio, ProfitLossStatement, TimelineView};
use model::PeriodDataStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::summary::percent_of;

pub const COST_TO_INCOME: &str = "Cost-to-income ratio";
pub const RETURN_ON_EQUITY: &str = "Return on equity";
pub const RETURN_ON_ASSETS: &str = "Return on assets";
pub const LOAN_TO_DEPOSIT: &str = "Loan-to-deposit ratio";
pub const EQUITY_RATIO: &str = "Equity ratio";
pub const NET_INTEREST_SHARE: &str = "Net interest share";

/// Ratios of one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRatios {
    pub period: String,
    pub ratios: Vec<FinancialRatio>,
}

impl PeriodRatios {
    pub fn get(&self, name: &str) -> Option<&FinancialRatio> {
        self.ratios.iter().find(|r| r.name == name)
    }
}

pub fn banking_ratios(pl: &ProfitLossStatement, bs: &BalanceSheet) -> Vec<FinancialRatio> {
    let operating_income = pl.net_operating_income();
    let profit = pl.profit_for_period();

    vec![
        FinancialRatio::percent(
            COST_TO_INCOME,
            percent_of(pl.total_operating_expenses(), operating_income),
        ),
        FinancialRatio::percent(RETURN_ON_EQUITY, percent_of(profit, bs.total_equity())),
        FinancialRatio::percent(RETURN_ON_ASSETS, percent_of(profit, bs.total_assets())),
        FinancialRatio::percent(
            LOAN_TO_DEPOSIT,
            percent_of(bs.assets.loans_and_overdrafts, bs.liabilities.due_to_customers),
        ),
        FinancialRatio::percent(EQUITY_RATIO, percent_of(bs.total_equity(), bs.total_assets())),
        FinancialRatio::percent(
            NET_INTEREST_SHARE,
            percent_of(pl.net_interest_income(), operating_income),
        ),
    ]
}

/// Ratios for every statement of `view` that has a balance sheet with the same
/// period label. Statements without one are skipped.
#[instrument(skip(store))]
pub fn ratios_for_view(store: &PeriodDataStore, view: TimelineView) -> Vec<PeriodRatios> {
    let ratios: Vec<PeriodRatios> = store
        .profit_and_loss(view)
        .iter()
        .filter_map(|pl| match store.balance_sheet_for(view, &pl.period) {
            Some(bs) => Some(PeriodRatios {
                period: pl.period.clone(),
                ratios: banking_ratios(pl, bs),
            }),
            None => {
                warn!(period = %pl.period, "No balance sheet for statement, skipping ratios");
                None
            }
        })
        .collect();

    debug!(periods = ratios.len(), "Computed banking ratios");
    ratios
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{AssetPositions, LiabilityPositions};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn small_bank() -> (ProfitLossStatement, BalanceSheet) {
        let pl = ProfitLossStatement {
            period: "2024".to_string(),
            interest_income: dec!(100),
            interest_expense: dec!(40),
            fee_income: dec!(30),
            fee_expense: dec!(10),
            derivatives_gains: dec!(0),
            credit_loss_expense: dec!(0),
            other_income: dec!(0),
            personnel_expenses: dec!(25),
            depreciation: dec!(5),
            other_operating_expenses: dec!(10),
            tax_expense: dec!(12),
            other_comprehensive_income: dec!(0),
        };
        let bs = BalanceSheet::balanced(
            "2024",
            AssetPositions {
                cash_and_central_banks: dec!(100),
                due_from_banks: dec!(0),
                derivatives: dec!(0),
                loans_and_overdrafts: dec!(800),
                debt_securities: dec!(100),
                other_assets: dec!(0),
            },
            LiabilityPositions {
                derivatives_liability: dec!(0),
                due_to_customers: dec!(850),
                due_to_financial_institutions: dec!(50),
                other_liabilities: dec!(0),
                provisions: dec!(0),
            },
            dec!(60),
            dec!(20),
            dec!(10),
        );
        (pl, bs)
    }

    #[test]
    fn test_banking_ratios_of_small_bank() {
        let (pl, bs) = small_bank();
        assert_eq!(bs.total_equity(), dec!(100));

        let ratios = PeriodRatios {
            period: pl.period.clone(),
            ratios: banking_ratios(&pl, &bs),
        };
        let value = |name: &str| ratios.get(name).unwrap().value.to_string();

        // operating income 80, operating expenses 40
        assert_eq!(value(COST_TO_INCOME), "50.0");
        assert_eq!(value(NET_INTEREST_SHARE), "75.0");
        assert_eq!(value(EQUITY_RATIO), "10.0");
        assert_eq!(value(LOAN_TO_DEPOSIT), "94.1");
        assert_eq!(ratios.get(RETURN_ON_EQUITY).unwrap().display_value(), "28.0%");
        assert_eq!(value(RETURN_ON_ASSETS), "2.8");
    }

    #[test]
    fn test_ratios_use_zero_guard() {
        let (mut pl, bs) = small_bank();
        pl.interest_income = Decimal::ZERO;
        pl.interest_expense = Decimal::ZERO;
        pl.fee_income = Decimal::ZERO;
        pl.fee_expense = Decimal::ZERO;
        let ratios = banking_ratios(&pl, &bs);
        assert_eq!(ratios[0].name, COST_TO_INCOME);
        assert_eq!(ratios[0].value.to_string(), "0.0");
    }

    #[test]
    fn test_ratios_for_every_builtin_period() {
        let store = PeriodDataStore::builtin();
        for view in TimelineView::ALL {
            let ratios = ratios_for_view(&store, view);
            assert_eq!(ratios.len(), store.profit_and_loss(view).len());
            for period in &ratios {
                assert_eq!(period.ratios.len(), 6);
                let equity_ratio = period.get(EQUITY_RATIO).unwrap().value;
                assert!(equity_ratio > Decimal::ZERO && equity_ratio < dec!(100));
            }
        }
    }
}
