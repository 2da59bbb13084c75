use yew::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Route,
    pub on_navigate: Callback<Route>,
    pub collapsed: bool,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let nav_item = |route: Route| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(route);
        });
        let class = if props.active == route {
            "nav-item active"
        } else {
            "nav-item"
        };
        html! {
            <a href="#" {class} {onclick}>
                <span class="nav-icon">{route.icon()}</span>
                if !props.collapsed {
                    <span class="nav-label">{route.title()}</span>
                }
            </a>
        }
    };

    let class = if props.collapsed {
        "sidebar collapsed"
    } else {
        "sidebar"
    };

    html! {
        <aside {class}>
            <div class="sidebar-brand">
                <span class="brand-icon">{"💎"}</span>
                if !props.collapsed {
                    <span class="brand-name">{"VillaParfum"}</span>
                }
            </div>
            <nav class="sidebar-nav">
                { for Route::ALL.iter().map(|route| nav_item(*route)) }
            </nav>
        </aside>
    }
}
