//! Banking statement fixtures, amounts in thousands of euros.
//!
//! Only base lines are written down here. Every subtotal is derived by the
//! record types, and retained earnings are the balancing equity position.

use common::{AssetPositions, BalanceSheet, LiabilityPositions, ProfitLossStatement};
use rust_decimal::Decimal;

/// P&L lines in column order:
/// interest income, interest expense, fee income, fee expense,
/// derivatives gains (signed), credit loss expense, other income,
/// personnel expenses, depreciation, other operating expenses,
/// tax expense, other comprehensive income (signed).
type StatementLines = [i64; 12];

fn statement(period: &str, lines: StatementLines) -> ProfitLossStatement {
    let [ii, ie, fi, fe, dg, cl, oi, pe, dep, ooe, tax, oci] = lines.map(Decimal::from);
    ProfitLossStatement {
        period: period.to_string(),
        interest_income: ii,
        interest_expense: ie,
        fee_income: fi,
        fee_expense: fe,
        derivatives_gains: dg,
        credit_loss_expense: cl,
        other_income: oi,
        personnel_expenses: pe,
        depreciation: dep,
        other_operating_expenses: ooe,
        tax_expense: tax,
        other_comprehensive_income: oci,
    }
}

/// Balance sheet positions:
/// assets (cash and central banks, due from banks, derivatives, loans and
/// overdrafts, debt securities, other assets), liabilities (derivatives, due
/// to customers, due to financial institutions, other liabilities,
/// provisions), equity (share capital, reserve capital, reserves).
fn sheet(period: &str, assets: [i64; 6], liabilities: [i64; 5], equity: [i64; 3]) -> BalanceSheet {
    let [cash, due_from, derivatives, loans, securities, other] = assets.map(Decimal::from);
    let [deriv_liab, customers, institutions, other_liab, provisions] =
        liabilities.map(Decimal::from);
    let [share_capital, reserve_capital, reserves] = equity.map(Decimal::from);

    BalanceSheet::balanced(
        period,
        AssetPositions {
            cash_and_central_banks: cash,
            due_from_banks: due_from,
            derivatives,
            loans_and_overdrafts: loans,
            debt_securities: securities,
            other_assets: other,
        },
        LiabilityPositions {
            derivatives_liability: deriv_liab,
            due_to_customers: customers,
            due_to_financial_institutions: institutions,
            other_liabilities: other_liab,
            provisions,
        },
        share_capital,
        reserve_capital,
        reserves,
    )
}

pub fn monthly_profit_and_loss() -> Vec<ProfitLossStatement> {
    vec![
        statement("Jan 2025", [4200, 1600, 900, 200, 40, 150, 60, 1100, 180, 520, 275, 12]),
        statement("Feb 2025", [4150, 1580, 870, 190, -25, 140, 55, 1090, 180, 505, 260, -8]),
        statement("Mar 2025", [4380, 1650, 950, 210, 65, 160, 70, 1120, 182, 540, 300, 20]),
        statement("Apr 2025", [4420, 1670, 930, 205, 30, 155, 58, 1130, 182, 530, 295, 5]),
        statement("May 2025", [4510, 1700, 980, 215, -10, 170, 62, 1140, 185, 550, 300, -15]),
        statement("Jun 2025", [4600, 1720, 1010, 220, 55, 165, 66, 1150, 185, 560, 320, 18]),
    ]
}

pub fn quarterly_profit_and_loss() -> Vec<ProfitLossStatement> {
    vec![
        statement("Q2 2024", [12100, 4700, 2550, 580, 90, 430, 170, 3200, 530, 1480, 780, 25]),
        statement("Q3 2024", [12450, 4820, 2620, 600, -60, 450, 160, 3250, 535, 1500, 760, -30]),
        statement("Q4 2024", [12900, 4950, 2740, 620, 120, 470, 185, 3300, 540, 1560, 850, 40]),
        statement("Q1 2025", [12730, 4830, 2720, 600, 80, 450, 185, 3310, 542, 1565, 835, 24]),
    ]
}

#[rustfmt::skip]
pub fn yearly_profit_and_loss() -> Vec<ProfitLossStatement> {
    vec![
        statement("2021", [41000, 14500, 8600, 1900, 150, 1900, 560, 11200, 1900, 5100, 2300, 60]),
        statement("2022", [43800, 15900, 9100, 2000, -220, 1750, 600, 11800, 1980, 5350, 2500, -90]),
        statement("2023", [47200, 18300, 9700, 2150, 310, 1680, 640, 12300, 2050, 5600, 2750, 110]),
        statement("2024", [49500, 19100, 10350, 2330, 260, 1800, 690, 12900, 2130, 5980, 2950, 70]),
        statement("2025", [26260, 9920, 5640, 1240, 155, 940, 371, 6730, 1094, 3205, 1750, 32]),
    ]
}

#[rustfmt::skip]
pub fn monthly_balance_sheets() -> Vec<BalanceSheet> {
    vec![
        sheet("Jan 2025", [52000, 18000, 3100, 265000, 71000, 6900], [2900, 318000, 42000, 7100, 1800], [15000, 6000, 2500]),
        sheet("Feb 2025", [50500, 18600, 2950, 267400, 71800, 6750], [2800, 319500, 42600, 6900, 1800], [15000, 6000, 2500]),
        sheet("Mar 2025", [53800, 17900, 3300, 270100, 72500, 7000], [3150, 323200, 43100, 7200, 1850], [15000, 6000, 2500]),
        sheet("Apr 2025", [54600, 18300, 3200, 272800, 73000, 7100], [3050, 326000, 43400, 7300, 1850], [15000, 6000, 2500]),
        sheet("May 2025", [55200, 18800, 3050, 275900, 73600, 7150], [2950, 329400, 43800, 7250, 1900], [15000, 6000, 2500]),
        sheet("Jun 2025", [56900, 19200, 3400, 279000, 74400, 7300], [3300, 333100, 44200, 7400, 1900], [15000, 6000, 2600]),
    ]
}

#[rustfmt::skip]
pub fn quarterly_balance_sheets() -> Vec<BalanceSheet> {
    vec![
        sheet("Q2 2024", [48200, 16900, 2800, 248500, 67200, 6400], [2600, 297800, 39800, 6700, 1700], [15000, 5500, 2300]),
        sheet("Q3 2024", [49600, 17300, 2900, 254000, 68400, 6600], [2700, 304600, 40500, 6800, 1750], [15000, 5500, 2300]),
        sheet("Q4 2024", [51000, 17700, 3000, 260200, 69900, 6800], [2850, 311500, 41300, 7000, 1750], [15000, 6000, 2400]),
        sheet("Q1 2025", [53800, 17900, 3300, 270100, 72500, 7000], [3150, 323200, 43100, 7200, 1850], [15000, 6000, 2500]),
    ]
}

#[rustfmt::skip]
pub fn yearly_balance_sheets() -> Vec<BalanceSheet> {
    vec![
        sheet("2021", [39500, 14200, 2100, 201000, 55800, 5200], [2000, 243500, 33100, 5600, 1400], [12000, 4000, 1800]),
        sheet("2022", [42300, 15000, 2400, 216500, 59400, 5600], [2250, 261000, 35200, 5900, 1500], [12000, 4500, 1900]),
        sheet("2023", [45900, 16000, 2650, 233800, 63600, 6000], [2450, 280700, 37600, 6300, 1600], [15000, 5000, 2100]),
        sheet("2024", [51000, 17700, 3000, 260200, 69900, 6800], [2850, 311500, 41300, 7000, 1750], [15000, 6000, 2400]),
        sheet("2025", [56900, 19200, 3400, 279000, 74400, 7300], [3300, 333100, 44200, 7400, 1900], [15000, 6000, 2600]),
    ]
}
