use common::TimelineView;
use log::Level;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::layout::SidebarContext;
use crate::settings::{get_settings, parse_level, update_settings, AppSettings};

const LEVELS: [Level; 5] = [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace];

/// Applies `draft` globally, to the running logger and to localStorage.
fn apply(draft: &AppSettings) {
    update_settings(|s| *s = draft.clone());
    log::set_max_level(draft.log_level.to_level_filter());
    match draft.save_to_storage() {
        Ok(()) => log::info!("Settings saved: {:?}", draft),
        Err(e) => log::error!("Failed to save settings: {:?}", e),
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let sidebar = use_context::<SidebarContext>();
    let draft = use_state(get_settings);
    let saved = use_state(|| false);

    let on_level = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            if let Some(level) = parse_level(&select.value()) {
                let mut next = (*draft).clone();
                next.log_level = level;
                draft.set(next);
            }
        })
    };

    let on_view = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            match select.value().parse::<TimelineView>() {
                Ok(view) => {
                    let mut next = (*draft).clone();
                    next.default_view = view;
                    draft.set(next);
                }
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    let on_currency = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                next.currency_symbol = input.value();
                draft.set(next);
            }
        })
    };

    let on_save = {
        let draft = draft.clone();
        let saved = saved.clone();
        Callback::from(move |_: MouseEvent| {
            apply(&draft);
            saved.set(true);
        })
    };

    let sidebar_open = sidebar.as_ref().map_or(true, |s| s.open);
    let on_sidebar = Callback::from(move |_: Event| match &sidebar {
        Some(sidebar) => sidebar.toggle.emit(()),
        None => log::warn!("Sidebar toggled without a provider"),
    });

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Display"}</h2>
                    <div class="form-control">
                        <label class="label cursor-pointer">
                            <span class="label-text">{"Keep sidebar open"}</span>
                            <input type="checkbox" class="toggle toggle-primary" checked={sidebar_open} onchange={on_sidebar} />
                        </label>
                    </div>
                    <div class="form-control w-full mt-4">
                        <label class="label"><span class="label-text">{"Currency symbol"}</span></label>
                        <input type="text" class="input input-bordered w-full" value={draft.currency_symbol.clone()} oninput={on_currency} />
                    </div>
                    <div class="form-control w-full mt-4">
                        <label class="label"><span class="label-text">{"Default timeline"}</span></label>
                        <select class="select select-bordered w-full" onchange={on_view}>
                            { for TimelineView::ALL.into_iter().map(|view| html! {
                                <option value={view.as_str()} selected={view == draft.default_view}>{ view.label() }</option>
                            }) }
                        </select>
                    </div>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Diagnostics"}</h2>
                    <div class="form-control w-full mt-4">
                        <label class="label"><span class="label-text">{"Log level"}</span></label>
                        <select class="select select-bordered w-full" onchange={on_level}>
                            { for LEVELS.into_iter().map(|level| html! {
                                <option value={level.as_str().to_lowercase()} selected={level == draft.log_level}>{ level.as_str() }</option>
                            }) }
                        </select>
                    </div>
                    <div class="card-actions justify-end items-center mt-4">
                        if *saved {
                            <span class="text-success text-sm">{"Saved"}</span>
                        }
                        <button class="btn btn-primary" onclick={on_save}>{"Save"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
