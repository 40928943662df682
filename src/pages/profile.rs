use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::verification_banner::VerificationBanner;
use crate::net::types::Identity;
use crate::routes::paths;

/// Read-only view of the signed-in identity.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<AppSession>().signal();

    view! {
        <div class="profile-page">
            <VerificationBanner/>
            <h1>"My profile"</h1>
            {move || session.with(|s| s.identity().cloned()).map(|identity| view! { <ProfileCard identity=identity/> })}
        </div>
    }
}

#[component]
fn ProfileCard(identity: Identity) -> impl IntoView {
    let verified = identity.verified;
    let initials = identity.initials();
    let (status_class, status_label) =
        if verified { ("profile-card__verified", "Verified") } else { ("profile-card__pending", "Not verified") };

    view! {
        <section class="profile-card">
            <div class="profile-card__avatar">{initials}</div>
            <dl class="profile-card__details">
                <dt>"Name"</dt>
                <dd>{identity.name}</dd>
                <dt>"Email"</dt>
                <dd>{identity.email}</dd>
                <dt>"Role"</dt>
                <dd>{identity.role.label()}</dd>
                <dt>"Email status"</dt>
                <dd class=status_class>{status_label}</dd>
            </dl>
            <Show when=move || !verified>
                <a href=paths::VERIFY_EMAIL class="button button--small">"Verify email"</a>
            </Show>
        </section>
    }
}
