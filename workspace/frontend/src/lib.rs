use std::rc::Rc;

use common::AlwaysAuthenticated;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod auth;
pub mod data;
pub mod router;
pub mod settings;

use auth::AuthContext;
use components::layout::SidebarProvider;
pub use router::Route;

#[function_component(App)]
pub fn app() -> Html {
    let auth = use_memo((), |_| AuthContext::new(Rc::new(AlwaysAuthenticated)));

    html! {
        <ContextProvider<AuthContext> context={(*auth).clone()}>
            <SidebarProvider>
                <BrowserRouter>
                    <Switch<Route> render={router::switch} />
                </BrowserRouter>
            </SidebarProvider>
        </ContextProvider<AuthContext>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== KPI Dashboard Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
