use common::{format_currency, PercentRow};
use compute::{field_label, BreakdownKind};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use yew::prelude::*;

use super::plotly::{base_layout, to_f64, Plot};

/// One stacked-area trace per field. Fields keep the order of the first row.
/// `amounts` holds the source value behind each share, row by row, and shows
/// up in the tooltip next to the percentage.
pub fn stacked_traces(rows: &[PercentRow], amounts: &[Vec<Decimal>], symbol: &str) -> Value {
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    let fields: Vec<&str> = rows
        .first()
        .map(|row| row.shares.iter().map(|s| s.field.as_str()).collect())
        .unwrap_or_default();

    let traces: Vec<Value> = fields
        .into_iter()
        .enumerate()
        .map(|(index, field)| {
            let values: Vec<f64> = rows
                .iter()
                .map(|row| row.get(field).map(to_f64).unwrap_or_default())
                .collect();
            let originals: Vec<String> = (0..rows.len())
                .map(|r| {
                    let amount = amounts
                        .get(r)
                        .and_then(|row| row.get(index))
                        .copied()
                        .unwrap_or_default();
                    format_currency(amount, symbol)
                })
                .collect();
            json!({
                "x": labels,
                "y": values,
                "customdata": originals,
                "type": "scatter",
                "mode": "lines",
                "stackgroup": "one",
                "name": field_label(field),
                "hovertemplate": "%{y:.1f}% (%{customdata})<extra>%{fullData.name}</extra>"
            })
        })
        .collect();

    Value::Array(traces)
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub kind: BreakdownKind,
    pub rows: Vec<PercentRow>,
    pub amounts: Vec<Vec<Decimal>>,
    pub currency_symbol: String,
}

#[function_component(BreakdownChart)]
pub fn breakdown_chart(props: &Props) -> Html {
    let mut layout = base_layout();
    layout["yaxis"]["range"] = json!([0, 100]);
    layout["yaxis"]["ticksuffix"] = json!("%");
    let id = format!("chart-breakdown-{}", props.kind.title().to_lowercase().replace(' ', "-"));

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{ props.kind.title() }</h2>
                <Plot {id} data={stacked_traces(&props.rows, &props.amounts, &props.currency_symbol)} {layout} height={280} />
            </div>
        </div>
    }
}
