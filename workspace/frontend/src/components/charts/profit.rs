use common::PeriodRecord;
use compute::gross_profit;
use serde_json::{json, Value};
use yew::prelude::*;

use super::plotly::{base_layout, to_f64, Plot, PROFIT_COLOR, REVENUE_COLOR};

/// Gross profit bars with net income drawn over them as a line.
pub fn profit_traces(records: &[PeriodRecord]) -> Value {
    let periods: Vec<&str> = records.iter().map(|r| r.period.as_str()).collect();
    let gross: Vec<f64> = records.iter().map(|r| to_f64(gross_profit(r))).collect();
    let net: Vec<f64> = records.iter().map(|r| to_f64(r.net_income)).collect();

    json!([
        {
            "x": periods,
            "y": gross,
            "type": "bar",
            "name": "Gross Profit",
            "marker": {"color": REVENUE_COLOR, "opacity": 0.6}
        },
        {
            "x": periods,
            "y": net,
            "type": "scatter",
            "mode": "lines+markers",
            "name": "Net Income",
            "line": {"color": PROFIT_COLOR, "shape": "spline"}
        }
    ])
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub records: Vec<PeriodRecord>,
}

#[function_component(ProfitChart)]
pub fn profit_chart(props: &Props) -> Html {
    html! {
        <Plot id="chart-profit" data={profit_traces(&props.records)} layout={base_layout()} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_loss_making_period_plots_below_zero() {
        let records = vec![PeriodRecord::new("Q1", dec!(100), dec!(145), dec!(20), dec!(-65))];
        let traces = profit_traces(&records);
        assert_eq!(traces[0]["y"], json!([-45.0]));
        assert_eq!(traces[1]["y"], json!([-65.0]));
    }
}
