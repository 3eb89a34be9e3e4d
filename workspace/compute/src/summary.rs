//! Summary totals and per-record metrics over period collections.
//!
//! Aggregate and per-record margins share [`percent_of`] so totals and row
//! percentages shown side by side always follow the same rounding and
//! zero-revenue policy.

use common::{MetricsSummary, PerformanceRow, PerformanceTable, PerformanceTotals, PeriodRecord};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, instrument};

/// Rounds to one decimal, half away from zero, and pins the scale to one so
/// the value always displays as e.g. `33.7`, `30.0` or `0.0`.
pub fn one_decimal(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// `part / whole × 100` with one decimal; `0.0` when `whole` is zero.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return one_decimal(Decimal::ZERO);
    }
    one_decimal(part * Decimal::ONE_HUNDRED / whole)
}

/// Reduces a period collection to its summary totals.
#[instrument(skip(records), fields(num_records = records.len()))]
pub fn summarize(records: &[PeriodRecord]) -> MetricsSummary {
    let total_revenue: Decimal = records.iter().map(|r| r.revenue).sum();
    let total_expenses: Decimal = records.iter().map(|r| r.cogs + r.operating_expenses).sum();
    let total_profit: Decimal = records.iter().map(|r| r.net_income).sum();
    let profit_margin_pct = percent_of(total_profit, total_revenue);

    debug!(
        %total_revenue,
        %total_expenses,
        %total_profit,
        %profit_margin_pct,
        "Summarized records"
    );

    MetricsSummary {
        total_revenue,
        total_expenses,
        total_profit,
        profit_margin_pct,
    }
}

/// Revenue minus cost of goods sold; negative when COGS exceed revenue.
pub fn gross_profit(record: &PeriodRecord) -> Decimal {
    record.revenue - record.cogs
}

/// Net income as a percentage of revenue, `0.0` for a zero-revenue record.
pub fn profit_margin_of(record: &PeriodRecord) -> Decimal {
    percent_of(record.net_income, record.revenue)
}

/// Rows and totals of the financial performance table, in input order.
#[instrument(skip(records), fields(num_records = records.len()))]
pub fn performance_table(records: &[PeriodRecord]) -> PerformanceTable {
    let rows: Vec<PerformanceRow> = records
        .iter()
        .map(|r| PerformanceRow {
            period: r.period.clone(),
            revenue: r.revenue,
            cogs: r.cogs,
            gross_profit: gross_profit(r),
            operating_expenses: r.operating_expenses,
            net_income: r.net_income,
            profit_margin_pct: profit_margin_of(r),
        })
        .collect();

    let revenue: Decimal = rows.iter().map(|r| r.revenue).sum();
    let net_income: Decimal = rows.iter().map(|r| r.net_income).sum();
    let totals = PerformanceTotals {
        revenue,
        cogs: rows.iter().map(|r| r.cogs).sum(),
        gross_profit: rows.iter().map(|r| r.gross_profit).sum(),
        operating_expenses: rows.iter().map(|r| r.operating_expenses).sum(),
        net_income,
        profit_margin_pct: percent_of(net_income, revenue),
    };

    PerformanceTable { rows, totals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn jan_feb() -> Vec<PeriodRecord> {
        vec![
            PeriodRecord::new("Jan", dec!(450000), dec!(180000), dec!(120000), dec!(150000)),
            PeriodRecord::new("Feb", dec!(520000), dec!(208000), dec!(135000), dec!(177000)),
        ]
    }

    #[test]
    fn test_summarize_two_months() {
        let summary = summarize(&jan_feb());
        assert_eq!(summary.total_revenue, dec!(970000));
        assert_eq!(summary.total_expenses, dec!(643000));
        assert_eq!(summary.total_profit, dec!(327000));
        assert_eq!(summary.profit_margin_pct.to_string(), "33.7");
    }

    #[test]
    fn test_summarize_empty_uses_zero_margin() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_revenue, Decimal::ZERO);
        assert_eq!(summary.total_expenses, Decimal::ZERO);
        assert_eq!(summary.total_profit, Decimal::ZERO);
        assert_eq!(summary.profit_margin_pct.to_string(), "0.0");
    }

    #[test]
    fn test_summarize_is_order_insensitive() {
        let mut records = jan_feb();
        let forward = summarize(&records);
        records.reverse();
        assert_eq!(summarize(&records), forward);
    }

    #[test]
    fn test_total_expenses_is_cogs_plus_opex() {
        let store = model::PeriodDataStore::builtin();
        let records = store.performance(common::TimelineView::Monthly);
        let expected: Decimal = records.iter().map(|r| r.total_expenses()).sum();
        assert_eq!(summarize(records).total_expenses, expected);
        assert_eq!(summarize(records).total_expenses, dec!(5_276_000));
    }

    #[test]
    fn test_gross_profit_may_be_negative() {
        let record = PeriodRecord::new("Q3", dec!(100), dec!(130), dec!(10), dec!(-45));
        assert_eq!(gross_profit(&record), dec!(-30));
        assert_eq!(profit_margin_of(&record).to_string(), "-45.0");
    }

    #[test]
    fn test_profit_margin_zero_revenue_guard() {
        let record = PeriodRecord::new("Q4", dec!(0), dec!(0), dec!(5), dec!(-5));
        assert_eq!(profit_margin_of(&record).to_string(), "0.0");
    }

    #[test]
    fn test_one_decimal_rounding() {
        assert_eq!(one_decimal(dec!(33.75)).to_string(), "33.8");
        assert_eq!(one_decimal(dec!(-33.75)).to_string(), "-33.8");
        assert_eq!(one_decimal(dec!(30)).to_string(), "30.0");
        assert_eq!(one_decimal(dec!(-0.04)).to_string(), "0.0");
    }

    #[test]
    fn test_performance_table_rows_and_totals() {
        let table = performance_table(&jan_feb());
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].period, "Jan");
        assert_eq!(table.rows[0].gross_profit, dec!(270000));
        assert_eq!(table.rows[0].profit_margin_pct.to_string(), "33.3");
        assert_eq!(table.rows[1].profit_margin_pct.to_string(), "34.0");
        assert_eq!(table.totals.gross_profit, dec!(582000));
        assert_eq!(table.totals.operating_expenses, dec!(255000));
        assert_eq!(
            table.totals.profit_margin_pct,
            summarize(&jan_feb()).profit_margin_pct
        );
    }
}
