//! Login page: email + password against `auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use api::types::{AuthResponse, LoginCredentials};
use api::{ApiClient, ApiError};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::Navigation;

use crate::net::api::{send, user_message};
use crate::state::auth::Auth;

const INVALID_CREDENTIALS: &str = "Credenciais inválidas";

/// Trim and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<LoginCredentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Informe e-mail e senha.");
    }
    if !email.contains('@') {
        return Err("Informe um e-mail válido.");
    }
    Ok(LoginCredentials { email: email.to_owned(), password: password.to_owned() })
}

/// Inline message for a failed login; rejections read as invalid credentials.
fn login_error_message(error: &ApiError) -> String {
    match error.status() {
        Some(400 | 401 | 403 | 404) => INVALID_CREDENTIALS.to_owned(),
        _ => user_message(error),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<Auth>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let request = match client.login(&credentials) {
            Ok(request) => request,
            Err(e) => {
                info.set(user_message(&e));
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match send::<AuthResponse>(request).await {
                Ok(resp) => match auth.login(&resp.token, resp.user) {
                    Ok(()) => {
                        navigate(Navigation::Home.path(), NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("session not persisted: {e}");
                        info.try_set("Não foi possível salvar a sessão neste navegador.".to_owned());
                    }
                },
                Err(e) => {
                    info.try_set(login_error_message(&e));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Back-office Jurídico"</h1>
                <p class="login-card__subtitle">"Acesse com seu e-mail e senha"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="voce@escritorio.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Senha"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
