//! Generic financial performance fixtures, in US dollars.

use common::{CashFlowRecord, ExpenseCategory, PeriodRecord};
use rust_decimal::Decimal;

fn record(
    period: &str,
    revenue: i64,
    cogs: i64,
    operating_expenses: i64,
    net_income: i64,
) -> PeriodRecord {
    PeriodRecord::new(
        period,
        Decimal::from(revenue),
        Decimal::from(cogs),
        Decimal::from(operating_expenses),
        Decimal::from(net_income),
    )
}

/// Full year 2025, one record per month.
pub fn monthly() -> Vec<PeriodRecord> {
    vec![
        record("January", 450_000, 180_000, 120_000, 150_000),
        record("February", 520_000, 208_000, 135_000, 177_000),
        record("March", 580_000, 232_000, 145_000, 203_000),
        record("April", 610_000, 244_000, 155_000, 211_000),
        record("May", 650_000, 260_000, 165_000, 225_000),
        record("June", 680_000, 272_000, 170_000, 238_000),
        record("July", 720_000, 288_000, 180_000, 252_000),
        record("August", 700_000, 280_000, 175_000, 245_000),
        record("September", 750_000, 300_000, 190_000, 260_000),
        record("October", 780_000, 312_000, 195_000, 273_000),
        record("November", 800_000, 320_000, 200_000, 280_000),
        record("December", 850_000, 340_000, 210_000, 300_000),
    ]
}

/// Last four quarters.
pub fn quarterly() -> Vec<PeriodRecord> {
    vec![
        record("Q2 2024", 3_500_000, 1_400_000, 950_000, 1_150_000),
        record("Q3 2024", 3_850_000, 1_540_000, 1_020_000, 1_290_000),
        record("Q4 2024", 4_200_000, 1_680_000, 1_100_000, 1_420_000),
        record("Q1 2025", 1_550_000, 620_000, 400_000, 530_000),
    ]
}

/// Last five years; 2025 is year to date.
pub fn yearly() -> Vec<PeriodRecord> {
    vec![
        record("2021", 12_000_000, 4_800_000, 3_200_000, 4_000_000),
        record("2022", 13_800_000, 5_520_000, 3_680_000, 4_600_000),
        record("2023", 15_900_000, 6_360_000, 4_240_000, 5_300_000),
        record("2024", 18_400_000, 7_360_000, 4_920_000, 6_120_000),
        record("2025", 8_090_000, 3_236_000, 2_115_000, 2_739_000),
    ]
}

/// First quarter of 2025 for each company, keyed by company id.
pub fn companies() -> Vec<(String, Vec<PeriodRecord>)> {
    vec![
        (
            "keyhole".to_string(),
            vec![
                record("January", 150_000, 60_000, 40_000, 50_000),
                record("February", 175_000, 70_000, 45_000, 60_000),
                record("March", 195_000, 78_000, 50_000, 67_000),
            ],
        ),
        (
            "payproff".to_string(),
            vec![
                record("January", 180_000, 72_000, 48_000, 60_000),
                record("February", 210_000, 84_000, 55_000, 71_000),
                record("March", 230_000, 92_000, 58_000, 80_000),
            ],
        ),
        (
            "intercode".to_string(),
            vec![
                record("January", 120_000, 48_000, 32_000, 40_000),
                record("February", 135_000, 54_000, 35_000, 46_000),
                record("March", 155_000, 62_000, 37_000, 56_000),
            ],
        ),
    ]
}

/// Operating expense categories for Q1 2025.
pub fn expense_breakdown() -> Vec<ExpenseCategory> {
    [
        ("Salaries & Wages", 180_000),
        ("Marketing & Advertising", 80_000),
        ("Rent & Utilities", 60_000),
        ("Technology & Software", 40_000),
        ("Other Operating", 40_000),
    ]
    .into_iter()
    .map(|(category, amount)| ExpenseCategory {
        category: category.to_string(),
        amount: Decimal::from(amount),
    })
    .collect()
}

/// Cash flow by activity for Q1 2025.
pub fn cash_flow() -> Vec<CashFlowRecord> {
    [
        ("January", 160_000, -30_000, -20_000),
        ("February", 185_000, -25_000, -15_000),
        ("March", 210_000, -35_000, -10_000),
    ]
    .into_iter()
    .map(|(period, operating, investing, financing)| CashFlowRecord {
        period: period.to_string(),
        operating: Decimal::from(operating),
        investing: Decimal::from(investing),
        financing: Decimal::from(financing),
    })
    .collect()
}
