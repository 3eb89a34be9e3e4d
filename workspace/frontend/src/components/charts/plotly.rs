//! Thin binding to the Plotly global loaded by `index.html`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

pub const REVENUE_COLOR: &str = "#3b82f6";
pub const EXPENSE_COLOR: &str = "#ef4444";
pub const PROFIT_COLOR: &str = "#22c55e";

/// Chart values are plotted as floats; decimals outside `f64` range plot as 0.
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Layout shared by every dashboard chart.
pub fn base_layout() -> Value {
    json!({
        "margin": {"t": 10, "r": 10, "l": 60, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"showgrid": false},
        "yaxis": {"showgrid": true, "gridcolor": "#eee"},
        "showlegend": true,
        "legend": {"orientation": "h", "y": -0.2}
    })
}

fn draw(div_id: &str, data: &Value, layout: &Value) -> Result<(), serde_wasm_bindgen::Error> {
    let config = json!({"responsive": true, "displayModeBar": false});
    newPlot(
        div_id,
        serde_wasm_bindgen::to_value(data)?,
        serde_wasm_bindgen::to_value(layout)?,
        serde_wasm_bindgen::to_value(&config)?,
    );
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// DOM id Plotly draws into; must be unique on the page
    pub id: AttrValue,
    pub data: Value,
    pub layout: Value,
    #[prop_or(320)]
    pub height: u32,
}

/// Container that (re)draws its traces whenever they change.
#[function_component(Plot)]
pub fn plot(props: &Props) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.data.clone(), props.layout.clone()),
        |(chart_ref, data, layout)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let div_id = element.id();
                if div_id.is_empty() {
                    log::warn!("Chart container has no id, skipping plot");
                } else if let Err(e) = draw(&div_id, data, layout) {
                    log::error!("Failed to hand chart {} to Plotly: {}", div_id, e);
                }
            }
            || ()
        },
    );

    html! {
        <div
            ref={chart_ref}
            id={props.id.clone()}
            class="chart-container"
            style={format!("height: {}px;", props.height)}
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_f64() {
        assert_eq!(to_f64(dec!(450000)), 450000.0);
        assert_eq!(to_f64(dec!(-12.5)), -12.5);
    }

    #[test]
    fn test_base_layout_is_transparent() {
        let layout = base_layout();
        assert_eq!(layout["paper_bgcolor"], "rgba(0,0,0,0)");
        assert_eq!(layout["legend"]["orientation"], "h");
    }
}
