use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::breadcrumb::Breadcrumb;
use super::navbar::Navbar;
use super::sidebar::{Sidebar, SidebarContext};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

/// Classes of the drawer root. Only the large-screen layout follows the
/// persisted sidebar flag; the mobile overlay always starts closed.
pub fn drawer_classes(sidebar_open: bool) -> Classes {
    classes!("drawer", sidebar_open.then_some("lg:drawer-open"))
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let sidebar = use_context::<SidebarContext>();
    let open = sidebar.as_ref().map_or(true, |s| s.open);
    let persisted_toggle = sidebar
        .map(|s| s.toggle)
        .unwrap_or_else(|| Callback::from(|_: ()| log::warn!("Sidebar toggled without a provider")));
    let mobile_open = use_state(|| false);

    let on_drawer_change = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                mobile_open.set(input.checked());
            }
        })
    };

    // The navbar button sits outside the overlay, so it flips both: the
    // overlay on small screens and the persisted flag on large ones.
    let on_toggle = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: ()| {
            mobile_open.set(!*mobile_open);
            persisted_toggle.emit(());
        })
    };

    html! {
        <div class={drawer_classes(open)}>
            <input id="app-drawer" type="checkbox" class="drawer-toggle" checked={*mobile_open} onchange={on_drawer_change} />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200 transition-all duration-300">
                <Navbar title={props.title.clone()} on_toggle_sidebar={on_toggle} />
                <Breadcrumb />
                <main class="flex-1 p-6 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
            <Sidebar />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_flag_only_drives_large_screens() {
        let open = drawer_classes(true);
        assert!(open.contains("drawer"));
        assert!(open.contains("lg:drawer-open"));
        assert!(!open.contains("drawer-open"));

        let closed = drawer_classes(false);
        assert!(closed.contains("drawer"));
        assert!(!closed.contains("lg:drawer-open"));
    }
}
