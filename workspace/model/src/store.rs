use std::collections::HashSet;

use common::{
    BalanceSheet, CashFlowRecord, ExpenseCategory, PeriodRecord, ProfitLossStatement, TimelineView,
};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, trace};

use crate::error::{ModelError, Result};
use crate::fixtures::{banking, performance};

/// One collection per period granularity.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewCollections<T> {
    pub monthly: Vec<T>,
    pub quarterly: Vec<T>,
    pub yearly: Vec<T>,
}

impl<T> Default for ViewCollections<T> {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

impl<T> ViewCollections<T> {
    pub fn new(monthly: Vec<T>, quarterly: Vec<T>, yearly: Vec<T>) -> Self {
        Self {
            monthly,
            quarterly,
            yearly,
        }
    }

    /// The slice for `view`, in chronological order.
    pub fn get(&self, view: TimelineView) -> &[T] {
        match view {
            TimelineView::Monthly => &self.monthly,
            TimelineView::Quarterly => &self.quarterly,
            TimelineView::Yearly => &self.yearly,
        }
    }

    /// Iterates `(view, slice)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TimelineView, &[T])> {
        TimelineView::ALL.into_iter().map(move |view| (view, self.get(view)))
    }
}

/// In-memory store of every dataset the dashboard displays.
///
/// Collections keep insertion order, which is chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodDataStore {
    performance: ViewCollections<PeriodRecord>,
    profit_and_loss: ViewCollections<ProfitLossStatement>,
    balance_sheets: ViewCollections<BalanceSheet>,
    companies: Vec<(String, Vec<PeriodRecord>)>,
    expense_breakdown: Vec<ExpenseCategory>,
    cash_flow: Vec<CashFlowRecord>,
}

impl PeriodDataStore {
    /// Creates a store from explicit collections.
    pub fn new(
        performance: ViewCollections<PeriodRecord>,
        profit_and_loss: ViewCollections<ProfitLossStatement>,
        balance_sheets: ViewCollections<BalanceSheet>,
    ) -> Self {
        Self {
            performance,
            profit_and_loss,
            balance_sheets,
            ..Default::default()
        }
    }

    pub fn with_companies(mut self, companies: Vec<(String, Vec<PeriodRecord>)>) -> Self {
        self.companies = companies;
        self
    }

    pub fn with_expense_breakdown(mut self, categories: Vec<ExpenseCategory>) -> Self {
        self.expense_breakdown = categories;
        self
    }

    pub fn with_cash_flow(mut self, cash_flow: Vec<CashFlowRecord>) -> Self {
        self.cash_flow = cash_flow;
        self
    }

    /// The store populated with the built-in fixtures.
    #[instrument]
    pub fn builtin() -> Self {
        let store = Self::new(
            ViewCollections::new(
                performance::monthly(),
                performance::quarterly(),
                performance::yearly(),
            ),
            ViewCollections::new(
                banking::monthly_profit_and_loss(),
                banking::quarterly_profit_and_loss(),
                banking::yearly_profit_and_loss(),
            ),
            ViewCollections::new(
                banking::monthly_balance_sheets(),
                banking::quarterly_balance_sheets(),
                banking::yearly_balance_sheets(),
            ),
        )
        .with_companies(performance::companies())
        .with_expense_breakdown(performance::expense_breakdown())
        .with_cash_flow(performance::cash_flow());

        info!(
            companies = store.companies.len(),
            "Loaded built-in period data store"
        );
        store
    }

    pub fn performance(&self, view: TimelineView) -> &[PeriodRecord] {
        self.performance.get(view)
    }

    pub fn profit_and_loss(&self, view: TimelineView) -> &[ProfitLossStatement] {
        self.profit_and_loss.get(view)
    }

    pub fn balance_sheets(&self, view: TimelineView) -> &[BalanceSheet] {
        self.balance_sheets.get(view)
    }

    /// Balance sheet with the same period label, if any.
    pub fn balance_sheet_for(&self, view: TimelineView, period: &str) -> Option<&BalanceSheet> {
        self.balance_sheets(view).iter().find(|s| s.period == period)
    }

    /// Company ids in sidebar order.
    pub fn companies(&self) -> impl Iterator<Item = &str> {
        self.companies.iter().map(|(id, _)| id.as_str())
    }

    pub fn company_performance(&self, company_id: &str) -> Result<&[PeriodRecord]> {
        self.companies
            .iter()
            .find(|(id, _)| id == company_id)
            .map(|(_, records)| records.as_slice())
            .ok_or_else(|| ModelError::UnknownCompany(company_id.to_string()))
    }

    pub fn expense_breakdown(&self) -> &[ExpenseCategory] {
        &self.expense_breakdown
    }

    pub fn cash_flow(&self) -> &[CashFlowRecord] {
        &self.cash_flow
    }

    /// Checks the fixture invariants: unique periods per collection,
    /// non-negative magnitudes and balanced balance sheets.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<()> {
        for (view, records) in self.performance.iter() {
            validate_records(&format!("{view} performance"), records)?;
            trace!(%view, records = records.len(), "Performance collection valid");
        }

        for (company, records) in &self.companies {
            validate_records(&format!("{company} performance"), records)?;
        }

        for (view, statements) in self.profit_and_loss.iter() {
            let collection = format!("{view} profit and loss");
            ensure_unique(&collection, statements.iter().map(|s| s.period.as_str()))?;
            for s in statements {
                for (field, amount) in s.magnitude_lines() {
                    ensure_non_negative(&collection, &s.period, field, amount)?;
                }
            }
        }

        for (view, sheets) in self.balance_sheets.iter() {
            let collection = format!("{view} balance sheets");
            ensure_unique(&collection, sheets.iter().map(|s| s.period.as_str()))?;
            for sheet in sheets {
                validate_sheet(&collection, sheet)?;
            }
        }

        debug!("Period data store passed validation");
        Ok(())
    }
}

fn ensure_unique<'a>(collection: &str, periods: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for period in periods {
        if !seen.insert(period) {
            return Err(ModelError::DuplicatePeriod {
                collection: collection.to_string(),
                period: period.to_string(),
            });
        }
    }
    Ok(())
}

fn ensure_non_negative(
    collection: &str,
    period: &str,
    field: &'static str,
    amount: Decimal,
) -> Result<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ModelError::NegativeAmount {
            collection: collection.to_string(),
            period: period.to_string(),
            field,
            amount,
        });
    }
    Ok(())
}

fn validate_records(collection: &str, records: &[PeriodRecord]) -> Result<()> {
    ensure_unique(collection, records.iter().map(|r| r.period.as_str()))?;
    for r in records {
        ensure_non_negative(collection, &r.period, "revenue", r.revenue)?;
        ensure_non_negative(collection, &r.period, "cogs", r.cogs)?;
        ensure_non_negative(collection, &r.period, "operatingExpenses", r.operating_expenses)?;
    }
    Ok(())
}

fn validate_sheet(collection: &str, sheet: &BalanceSheet) -> Result<()> {
    for (field, amount) in sheet.magnitude_positions() {
        ensure_non_negative(collection, &sheet.period, field, amount)?;
    }
    if !sheet.is_balanced() {
        return Err(ModelError::Unbalanced {
            period: sheet.period.clone(),
            assets: sheet.total_assets(),
            funding: sheet.total_liabilities() + sheet.total_equity(),
        });
    }
    if sheet.retained_earnings.is_sign_negative() && !sheet.retained_earnings.is_zero() {
        return Err(ModelError::NegativeBalancingPosition {
            period: sheet.period.clone(),
            amount: sheet.retained_earnings,
        });
    }
    Ok(())
}
