//! Login page: email + password against the Authority.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::AppSession;
use crate::net::types::LoginRequest;
use crate::routes::landing::{self, FROM_PARAM};
use crate::routes::paths;
use crate::util::task::spawn_in_browser;

const LOGIN_FAILED: &str = "Login failed. Please try again.";

/// Trim inputs and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        let from = query.with_untracked(|q| q.get(FROM_PARAM));
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_in_browser(async move {
            match session.login(&request).await {
                Ok(envelope) => {
                    let target = landing::post_login_route(envelope.user.as_ref(), from.as_deref());
                    navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
                Err(e) => error.set(e.user_message(LOGIN_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="you@college.edu"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error" role="alert">{move || error.get()}</p>
                    </Show>
                    <button class="button button--wide" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href=paths::REGISTER>"Create one"</a>
                </p>
            </div>
        </div>
    }
}
