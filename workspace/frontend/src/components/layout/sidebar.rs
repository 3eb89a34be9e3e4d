use common::{nav_sections, SidebarState};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::settings::LocalStorageSettings;
use crate::Route;

/// Sidebar open flag plus the callback that flips and persists it.
#[derive(Clone, PartialEq)]
pub struct SidebarContext {
    pub open: bool,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct SidebarProviderProps {
    pub children: Children,
}

/// Reads the persisted sidebar flag once and shares it with every layout.
#[function_component(SidebarProvider)]
pub fn sidebar_provider(props: &SidebarProviderProps) -> Html {
    let state = use_state(|| SidebarState::load(&LocalStorageSettings));

    let toggle = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut next = *state;
            let open = next.toggle(&LocalStorageSettings);
            log::debug!("Sidebar {}", if open { "opened" } else { "closed" });
            state.set(next);
        })
    };

    let context = SidebarContext {
        open: state.is_open(),
        toggle,
    };

    html! {
        <ContextProvider<SidebarContext> context={context}>
            { props.children.clone() }
        </ContextProvider<SidebarContext>>
    }
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let current = use_route::<Route>();
    let link_class = |target: &Route| {
        classes!("nav-link", (current.as_ref() == Some(target)).then_some("active"))
    };

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="app-drawer"></label>
            <ul class="menu p-4 w-72 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-chart-line"></i>
                        </div>
                        <span class="text-xl font-bold tracking-tight">{"KPI Dashboard"}</span>
                    </div>
                </li>

                <li><Link<Route> to={Route::Home} classes={link_class(&Route::Home)}><i class="fas fa-home w-5"></i> {"Dashboard"}</Link<Route>></li>

                {for nav_sections().into_iter().map(|section| {
                    let items = section.items.into_iter().filter_map(|item| {
                        match Route::recognize(&item.url) {
                            Some(route) => Some(html! {
                                <li><Link<Route> to={route.clone()} classes={link_class(&route)}>{ item.title }</Link<Route>></li>
                            }),
                            None => {
                                log::warn!("Sidebar item {} has no route", item.url);
                                None
                            }
                        }
                    });
                    html! {
                        <li>
                            <details open={true}>
                                <summary>{ section.title }</summary>
                                <ul>{ for items }</ul>
                            </details>
                        </li>
                    }
                })}

                <div class="divider"></div>

                <li><Link<Route> to={Route::Settings} classes={link_class(&Route::Settings)}><i class="fas fa-cog w-5"></i> {"Settings"}</Link<Route>></li>
            </ul>
        </div>
    }
}
