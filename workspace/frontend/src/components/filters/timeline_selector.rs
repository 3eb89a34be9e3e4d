use common::TimelineView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub selected: TimelineView,
    pub on_select: Callback<TimelineView>,
}

/// Segmented control switching between monthly, quarterly and yearly data.
#[function_component(TimelineSelector)]
pub fn timeline_selector(props: &Props) -> Html {
    html! {
        <div class="join" role="group" aria-label="Timeline view">
            { for TimelineView::ALL.into_iter().map(|view| {
                let active = view == props.selected;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(view))
                };
                html! {
                    <button
                        class={classes!("btn", "btn-sm", "join-item", active.then_some("btn-primary"))}
                        aria-pressed={active.to_string()}
                        {onclick}
                    >
                        { view.label() }
                    </button>
                }
            }) }
        </div>
    }
}
