use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Breadcrumb)]
pub fn breadcrumb() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::Home);
    let items = route.breadcrumbs();

    html! {
        <div class="breadcrumbs text-sm px-6 py-2 bg-base-100">
            <ul>
                {for items.iter().enumerate().map(|(idx, (label, target))| {
                    let is_last = idx == items.len() - 1;
                    html! {
                        <li>
                            if is_last {
                                <span class="text-primary font-semibold">{ label.clone() }</span>
                            } else {
                                <Link<Route> to={target.clone()} classes="hover:text-primary">
                                    { label.clone() }
                                </Link<Route>>
                            }
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
