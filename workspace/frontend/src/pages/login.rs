use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let navigator = use_navigator();

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        log::info!("Sign in submitted");
        match &navigator {
            Some(navigator) => navigator.push(&Route::Home),
            None => log::error!("Login page rendered outside a router"),
        }
    });

    html! {
        <div class="flex min-h-screen items-center justify-center bg-base-200">
            <form class="card w-full max-w-md bg-base-100 shadow-lg" {onsubmit}>
                <div class="card-body gap-4">
                    <div class="text-center">
                        <h1 class="text-3xl font-bold">{"Multi-Company KPI Dashboard"}</h1>
                        <p class="mt-2 text-sm text-base-content/60">{"Sign in to access your dashboard"}</p>
                    </div>
                    <label class="form-control w-full">
                        <span class="label-text">{"Email"}</span>
                        <input id="email" type="email" placeholder="you@example.com" class="input input-bordered w-full" />
                    </label>
                    <label class="form-control w-full">
                        <span class="label-text">{"Password"}</span>
                        <input id="password" type="password" class="input input-bordered w-full" />
                    </label>
                    <button type="submit" class="btn btn-primary w-full">{"Sign In"}</button>
                </div>
            </form>
        </div>
    }
}
