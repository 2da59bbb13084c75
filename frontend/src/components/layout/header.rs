use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    pub on_toggle_sidebar: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_toggle = {
        let cb = props.on_toggle_sidebar.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_logout = {
        let cb = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <header class="topbar">
            <div class="topbar-left">
                <button class="icon-button" onclick={on_toggle} aria-label="Toggle menu">
                    {"☰"}
                </button>
                <h1 class="page-title">{props.title.clone()}</h1>
            </div>
            <div class="topbar-right">
                <button class="button-ghost" onclick={on_logout}>{"Keluar"}</button>
            </div>
        </header>
    }
}
