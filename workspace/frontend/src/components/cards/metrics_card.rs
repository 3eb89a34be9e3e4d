use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or(AttrValue::Static("fa-gauge"))]
    pub icon: AttrValue,
    /// `(name, displayed value)` pairs
    pub metrics: Vec<(String, String)>,
    /// Extra controls rendered in the card header, e.g. a period selector
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MetricsCard)]
pub fn metrics_card(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-start justify-between gap-4">
                    <div>
                        <h2 class="card-title">
                            <i class={classes!("fas", props.icon.to_string(), "text-primary")}></i>
                            { props.title.clone() }
                        </h2>
                        if let Some(description) = &props.description {
                            <p class="text-sm text-base-content/60">{ description.clone() }</p>
                        }
                    </div>
                    { for props.children.iter() }
                </div>
                if props.metrics.is_empty() {
                    <p class="text-base-content/60">{"No data for this period"}</p>
                } else {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 mt-2">
                        { for props.metrics.iter().map(|(name, value)| html! {
                            <div class="rounded-lg bg-base-200 p-4">
                                <div class="text-sm text-base-content/70">{ name.clone() }</div>
                                <div class="text-xl font-semibold">{ value.clone() }</div>
                            </div>
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}
