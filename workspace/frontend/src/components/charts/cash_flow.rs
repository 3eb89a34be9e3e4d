use common::CashFlowRecord;
use serde_json::{json, Value};
use yew::prelude::*;

use super::plotly::{base_layout, to_f64, Plot, EXPENSE_COLOR, PROFIT_COLOR, REVENUE_COLOR};

/// Relative bars per activity with the net cash flow as a line.
pub fn cash_flow_traces(records: &[CashFlowRecord]) -> Value {
    let periods: Vec<&str> = records.iter().map(|r| r.period.as_str()).collect();
    let series = |name: &str, color: &str, f: fn(&CashFlowRecord) -> rust_decimal::Decimal| {
        let values: Vec<f64> = records.iter().map(|r| to_f64(f(r))).collect();
        json!({
            "x": periods,
            "y": values,
            "type": "bar",
            "name": name,
            "marker": {"color": color}
        })
    };

    let net: Vec<f64> = records.iter().map(|r| to_f64(r.net_cash_flow())).collect();
    json!([
        series("Operating", PROFIT_COLOR, |r| r.operating),
        series("Investing", REVENUE_COLOR, |r| r.investing),
        series("Financing", EXPENSE_COLOR, |r| r.financing),
        {
            "x": periods,
            "y": net,
            "type": "scatter",
            "mode": "lines+markers",
            "name": "Net Cash Flow",
            "line": {"color": "#111827"}
        }
    ])
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub records: Vec<CashFlowRecord>,
}

#[function_component(CashFlowChart)]
pub fn cash_flow_chart(props: &Props) -> Html {
    let mut layout = base_layout();
    layout["barmode"] = json!("relative");

    html! {
        <Plot id="chart-cash-flow" data={cash_flow_traces(&props.records)} {layout} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_net_line_follows_activities() {
        let records = vec![CashFlowRecord {
            period: "Q1".to_string(),
            operating: dec!(150000),
            investing: dec!(-50000),
            financing: dec!(10000),
        }];
        let traces = cash_flow_traces(&records);
        assert_eq!(traces[1]["y"], json!([-50000.0]));
        assert_eq!(traces[3]["name"], "Net Cash Flow");
        assert_eq!(traces[3]["y"], json!([110000.0]));
    }
}
