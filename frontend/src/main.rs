mod components;
mod hooks;
mod pages;
mod routes;
mod services;

use yew::prelude::*;

use components::layout::MainLayout;
use pages::dashboard::DashboardPage;
use pages::login::LoginPage;
use pages::stores::StoresPage;
use pages::transactions::TransactionsPage;
use pages::users::UsersPage;
use routes::Route;
use services::auth;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    // A stored token from a previous session keeps the admin signed in.
    let token = use_state(auth::token);
    let route = use_state(|| Route::Dashboard);

    let on_login = {
        let token = token.clone();
        Callback::from(move |value: String| {
            auth::store_token(&value);
            token.set(Some(value));
        })
    };

    let on_logout = {
        let token = token.clone();
        let route = route.clone();
        Callback::from(move |_| {
            Logger::info("App", "session ended");
            auth::clear_token();
            token.set(None);
            route.set(Route::Dashboard);
        })
    };

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| route.set(target))
    };

    if token.is_none() {
        return html! { <LoginPage {on_login} /> };
    }

    html! {
        <MainLayout active={*route} {on_navigate} {on_logout}>
            {
                match *route {
                    Route::Dashboard => html! { <DashboardPage /> },
                    Route::Transactions => html! { <TransactionsPage /> },
                    Route::Stores => html! { <StoresPage /> },
                    Route::Users => html! { <UsersPage /> },
                }
            }
        </MainLayout>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
