use common::PeriodRecord;
use serde_json::{json, Value};
use yew::prelude::*;

use super::plotly::{base_layout, to_f64, Plot, EXPENSE_COLOR, REVENUE_COLOR};

/// Grouped bars of revenue against total expenses per period.
pub fn revenue_expense_traces(records: &[PeriodRecord]) -> Value {
    let periods: Vec<&str> = records.iter().map(|r| r.period.as_str()).collect();
    let revenue: Vec<f64> = records.iter().map(|r| to_f64(r.revenue)).collect();
    let expenses: Vec<f64> = records.iter().map(|r| to_f64(r.total_expenses())).collect();

    json!([
        {
            "x": periods,
            "y": revenue,
            "type": "bar",
            "name": "Revenue",
            "marker": {"color": REVENUE_COLOR}
        },
        {
            "x": periods,
            "y": expenses,
            "type": "bar",
            "name": "Expenses",
            "marker": {"color": EXPENSE_COLOR}
        }
    ])
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub records: Vec<PeriodRecord>,
}

#[function_component(RevenueExpensesChart)]
pub fn revenue_expenses_chart(props: &Props) -> Html {
    let mut layout = base_layout();
    layout["barmode"] = json!("group");

    html! {
        <Plot id="chart-revenue-expenses" data={revenue_expense_traces(&props.records)} {layout} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_expense_bars_include_cogs() {
        let records = vec![
            PeriodRecord::new("January", dec!(450000), dec!(180000), dec!(120000), dec!(150000)),
            PeriodRecord::new("February", dec!(520000), dec!(200000), dec!(143000), dec!(177000)),
        ];
        let traces = revenue_expense_traces(&records);
        assert_eq!(traces[0]["x"], json!(["January", "February"]));
        assert_eq!(traces[0]["y"], json!([450000.0, 520000.0]));
        assert_eq!(traces[1]["name"], "Expenses");
        assert_eq!(traces[1]["y"], json!([300000.0, 343000.0]));
    }
}
