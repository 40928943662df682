//! Sign-up page. New accounts are students and must verify their email.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::net::types::{Role, SignupRequest};
use crate::routes::{landing, paths};
use crate::util::task::spawn_in_browser;

const SIGNUP_FAILED: &str = "Registration failed. Please try again.";
const MIN_PASSWORD_LEN: usize = 6;

/// Query flag telling the verification page the user just signed up.
pub const NEW_ACCOUNT_PARAM: &str = "new";

fn validate_signup_input(name: &str, email: &str, password: &str) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in your name, email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(SignupRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role: Role::Student,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request =
            match validate_signup_input(&name.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
                Ok(request) => request,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        error.set(String::new());
        busy.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        spawn_in_browser(async move {
            match session.signup(&request).await {
                Ok(_) => {
                    let target = format!("{}?{NEW_ACCOUNT_PARAM}=1", landing::post_signup_route());
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => error.set(e.user_message(SIGNUP_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">"Register to book college events"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span>"Full name"</span>
                        <input
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href=paths::LOGIN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
