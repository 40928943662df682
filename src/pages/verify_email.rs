//! Email verification page: submit the code mailed after sign-up.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::AppSession;
use crate::pages::register::NEW_ACCOUNT_PARAM;
use crate::routes::{landing, paths};
use crate::util::task::spawn_in_browser;

const VERIFY_FAILED: &str = "Invalid or expired verification code.";
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_MS: u32 = 1_000;

/// Strip whitespace anywhere in the pasted code.
fn normalize_code(raw: &str) -> Result<String, &'static str> {
    let code: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if code.is_empty() {
        return Err("Enter the verification code from your email.");
    }
    Ok(code)
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let query = use_query_map();

    let code = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let verified = RwSignal::new(false);

    let just_registered = move || query.with(|q| q.get(NEW_ACCOUNT_PARAM).is_some());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || verified.get_untracked() {
            return;
        }
        let code_value = match normalize_code(&code.get_untracked()) {
            Ok(code_value) => code_value,
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
            match session.verify_email(&code_value).await {
                Ok(envelope) => {
                    verified.set(true);
                    busy.set(false);
                    #[cfg(feature = "hydrate")]
                    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    let target = landing::post_verify_route(envelope.user.as_ref());
                    navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
                Err(e) => {
                    error.set(e.user_message(VERIFY_FAILED));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Verify your email"</h1>
                <p class="auth-card__subtitle">
                    {move || {
                        if just_registered() {
                            "We sent a verification code to your email. Enter it below."
                        } else {
                            "Enter the verification code from your email."
                        }
                    }}
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span>"Verification code"</span>
                        <input
                            type="text"
                            inputmode="numeric"
                            autocomplete="one-time-code"
                            placeholder="e.g. 123456"
                            required
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error" role="alert">{move || error.get()}</p>
                    </Show>
                    <Show when=move || verified.get()>
                        <p class="auth-form__success">"Email verified! Redirecting..."</p>
                    </Show>
                    <button class="button button--wide" type="submit" disabled=move || busy.get() || verified.get()>
                        {move || if busy.get() { "Verifying..." } else { "Verify email" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Didn't receive the code? "
                    <a href=paths::LOGIN>"Sign in"</a>
                    " or "
                    <a href=paths::REGISTER>"Register again"</a>
                </p>
            </div>
        </div>
    }
}
