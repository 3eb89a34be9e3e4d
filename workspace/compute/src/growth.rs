use common::PeriodRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::summary::one_decimal;

/// Which series a trend indicator follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Revenue,
    Expenses,
    Profit,
}

impl Metric {
    pub fn value_of(self, record: &PeriodRecord) -> Decimal {
        match self {
            Metric::Revenue => record.revenue,
            Metric::Expenses => record.total_expenses(),
            Metric::Profit => record.net_income,
        }
    }
}

/// Change between the last two periods of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodChange {
    pub period: String,
    pub previous_period: String,
    pub pct: Decimal,
}

impl PeriodChange {
    pub fn is_increase(&self) -> bool {
        self.pct.is_sign_positive() && !self.pct.is_zero()
    }
}

/// Relative change from `previous` to `current` in percent, one decimal.
///
/// Measured against `|previous|`, so recovering from a loss reads as growth.
/// `None` when there is no base to compare against.
pub fn growth_pct(current: Decimal, previous: Decimal) -> Option<Decimal> {
    if previous.is_zero() {
        return None;
    }
    Some(one_decimal(
        (current - previous) * Decimal::ONE_HUNDRED / previous.abs(),
    ))
}

pub fn latest_change(records: &[PeriodRecord], metric: Metric) -> Option<PeriodChange> {
    let [.., previous, current] = records else {
        return None;
    };
    let pct = growth_pct(metric.value_of(current), metric.value_of(previous))?;
    Some(PeriodChange {
        period: current.period.clone(),
        previous_period: previous.period.clone(),
        pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_growth_pct() {
        assert_eq!(growth_pct(dec!(520000), dec!(450000)).unwrap().to_string(), "15.6");
        assert_eq!(growth_pct(dec!(90), dec!(100)).unwrap().to_string(), "-10.0");
        assert_eq!(growth_pct(dec!(10), dec!(-20)).unwrap().to_string(), "150.0");
        assert_eq!(growth_pct(dec!(10), Decimal::ZERO), None);
    }

    #[test]
    fn test_latest_change_uses_last_two_records() {
        let records = vec![
            PeriodRecord::new("Jan", dec!(100), dec!(40), dec!(20), dec!(40)),
            PeriodRecord::new("Feb", dec!(200), dec!(80), dec!(40), dec!(80)),
            PeriodRecord::new("Mar", dec!(150), dec!(60), dec!(30), dec!(60)),
        ];
        let change = latest_change(&records, Metric::Revenue).unwrap();
        assert_eq!(change.period, "Mar");
        assert_eq!(change.previous_period, "Feb");
        assert_eq!(change.pct.to_string(), "-25.0");
        assert!(!change.is_increase());

        let expenses = latest_change(&records, Metric::Expenses).unwrap();
        assert_eq!(expenses.pct, dec!(-25.0));
    }

    #[test]
    fn test_latest_change_needs_two_records() {
        let single = vec![PeriodRecord::new("Jan", dec!(100), dec!(40), dec!(20), dec!(40))];
        assert_eq!(latest_change(&single, Metric::Profit), None);
        assert_eq!(latest_change(&[], Metric::Profit), None);
    }
}
