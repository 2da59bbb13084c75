pub mod header;
pub mod sidebar;

use yew::prelude::*;

use crate::routes::Route;
use header::Header;
use sidebar::Sidebar;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub active: Route,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
    pub children: Html,
}

#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    let collapsed = use_state(|| false);

    let on_toggle_sidebar = {
        let collapsed = collapsed.clone();
        Callback::from(move |_| collapsed.set(!*collapsed))
    };

    html! {
        <div class="layout">
            <Sidebar
                active={props.active}
                on_navigate={props.on_navigate.clone()}
                collapsed={*collapsed}
            />
            <div class="layout-main">
                <Header
                    title={props.active.title()}
                    {on_toggle_sidebar}
                    on_logout={props.on_logout.clone()}
                />
                <main class="layout-content">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
