use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub periods: Vec<String>,
    pub selected: Option<String>,
    pub on_change: Callback<String>,
}

#[function_component(PeriodSelect)]
pub fn period_select(props: &Props) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit(select.value());
            }
        })
    };

    html! {
        <select class="select select-bordered select-sm" {onchange}>
            { for props.periods.iter().map(|period| html! {
                <option value={period.clone()} selected={props.selected.as_ref() == Some(period)}>
                    { period.clone() }
                </option>
            }) }
        </select>
    }
}
