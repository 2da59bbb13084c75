use shared::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    /// Fires with the session token once the backend accepts the credentials.
    pub on_login: Callback<String>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let request = LoginRequest {
                username: username.trim().to_string(),
                password: (*password).clone(),
            };
            if request.username.is_empty() || request.password.is_empty() {
                error.set(Some("Username dan password wajib diisi.".to_string()));
                return;
            }
            busy.set(true);
            error.set(None);
            let error = error.clone();
            let busy = busy.clone();
            let on_login = on_login.clone();
            spawn_local(async move {
                match ApiClient::new().login(&request).await {
                    Ok(response) => {
                        Logger::info("LoginPage", "login accepted");
                        on_login.emit(response.token);
                    }
                    Err(message) => {
                        Logger::warn("LoginPage", &format!("login rejected: {message}"));
                        error.set(Some(message));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="login-screen">
            <form class="login-card" {onsubmit}>
                <div class="login-brand">
                    <span class="brand-icon">{"💎"}</span>
                    <h1>{"VillaParfum Admin"}</h1>
                    <p>{"Masuk untuk mengelola toko Anda"}</p>
                </div>
                if let Some(message) = (*error).clone() {
                    <div class="form-error-banner">{message}</div>
                }
                <label class="field">
                    <span>{"Username"}</span>
                    <input
                        type="text"
                        value={(*username).clone()}
                        oninput={on_username}
                        autocomplete="username"
                    />
                </label>
                <label class="field">
                    <span>{"Password"}</span>
                    <div class="password-field">
                        <input
                            type={if *show_password { "text" } else { "password" }}
                            value={(*password).clone()}
                            oninput={on_password}
                            autocomplete="current-password"
                        />
                        <button
                            type="button"
                            class="password-toggle"
                            aria-label="Toggle password visibility"
                            onclick={on_toggle_password}
                        >
                            {if *show_password { "🙈" } else { "👁" }}
                        </button>
                    </div>
                </label>
                <button type="submit" class="button-primary" disabled={*busy}>
                    { if *busy { "Memeriksa..." } else { "Masuk" } }
                </button>
            </form>
        </div>
    }
}
