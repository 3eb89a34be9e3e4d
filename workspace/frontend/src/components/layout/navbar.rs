use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    pub on_toggle_sidebar: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle_sidebar.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none">
                <button aria-label="toggle sidebar" class="btn btn-square btn-ghost" {onclick}>
                    <i class="fas fa-bars text-xl"></i>
                </button>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ props.title.clone() }</h1>
            </div>
        </div>
    }
}
