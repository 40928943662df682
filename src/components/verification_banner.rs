use leptos::prelude::*;

use crate::app::AppSession;
use crate::routes::paths;
use crate::util::banner;

/// Reminder for unverified users; dismissal is remembered in this browser.
#[component]
pub fn VerificationBanner() -> impl IntoView {
    let session = expect_context::<AppSession>().signal();
    let dismissed = RwSignal::new(banner::is_dismissed());

    let visible = move || session.with(|s| banner::should_show(s.identity(), dismissed.get()));
    let on_dismiss = move |_| {
        banner::dismiss();
        dismissed.set(true);
    };

    view! {
        <Show when=visible>
            <div class="banner banner--warning" role="alert">
                <div>
                    <h3 class="banner__title">"Email verification required"</h3>
                    <p>"Please verify your email to access all features. Check your inbox for the verification code."</p>
                </div>
                <div class="banner__actions">
                    <a href=paths::VERIFY_EMAIL class="button button--small">"Verify now"</a>
                    <button type="button" class="button button--ghost" on:click=on_dismiss>
                        "Dismiss"
                    </button>
                </div>
            </div>
        </Show>
    }
}
