//! Output shapes of the metrics aggregator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary totals over a period collection.
///
/// `profit_margin_pct` is `0.0` when there is no revenue. That value is a
/// display policy, not a real margin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub total_revenue: Decimal,
    pub total_expenses: Decimal,
    pub total_profit: Decimal,
    pub profit_margin_pct: Decimal,
}

/// One row of the financial performance table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRow {
    pub period: String,
    pub revenue: Decimal,
    pub cogs: Decimal,
    pub gross_profit: Decimal,
    pub operating_expenses: Decimal,
    pub net_income: Decimal,
    pub profit_margin_pct: Decimal,
}

/// Totals row of the financial performance table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTotals {
    pub revenue: Decimal,
    pub cogs: Decimal,
    pub gross_profit: Decimal,
    pub operating_expenses: Decimal,
    pub net_income: Decimal,
    pub profit_margin_pct: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceTable {
    pub rows: Vec<PerformanceRow>,
    pub totals: PerformanceTotals,
}

/// Share of one field in its row, in percent with one decimal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldShare {
    pub field: String,
    pub percent: Decimal,
}

/// One row of a 100%-stacked series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PercentRow {
    /// Label of the source record (its period)
    pub label: String,
    /// Shares in the order the fields were requested
    pub shares: Vec<FieldShare>,
}

impl PercentRow {
    pub fn get(&self, field: &str) -> Option<Decimal> {
        self.shares
            .iter()
            .find(|share| share.field == field)
            .map(|share| share.percent)
    }

    /// Sum of all shares; 100.0 up to rounding for a row with a nonzero total.
    pub fn total(&self) -> Decimal {
        self.shares.iter().map(|share| share.percent).sum()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RatioUnit {
    Percent,
    Multiple,
}

/// A named banking ratio for one period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialRatio {
    pub name: String,
    pub value: Decimal,
    pub unit: RatioUnit,
}

impl FinancialRatio {
    pub fn percent(name: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            value,
            unit: RatioUnit::Percent,
        }
    }

    pub fn multiple(name: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            value,
            unit: RatioUnit::Multiple,
        }
    }

    /// Value as shown on the ratios card.
    pub fn display_value(&self) -> String {
        match self.unit {
            RatioUnit::Percent => format!("{:.1}%", self.value),
            RatioUnit::Multiple => format!("{:.2}x", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percent_row_lookup_and_total() {
        let row = PercentRow {
            label: "Q1".to_string(),
            shares: vec![
                FieldShare { field: "a".to_string(), percent: dec!(33.3) },
                FieldShare { field: "b".to_string(), percent: dec!(66.7) },
            ],
        };
        assert_eq!(row.get("b"), Some(dec!(66.7)));
        assert_eq!(row.get("c"), None);
        assert_eq!(row.total(), dec!(100.0));
    }

    #[test]
    fn test_ratio_display() {
        assert_eq!(FinancialRatio::percent("ROE", dec!(12.4)).display_value(), "12.4%");
        assert_eq!(FinancialRatio::multiple("Coverage", dec!(1.5)).display_value(), "1.50x");
    }
}
