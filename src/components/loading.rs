use leptos::prelude::*;

/// Neutral placeholder shown while a gated view waits for the session.
#[component]
pub fn LoadingIndicator(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="loading__spinner"></span>
            <p class="loading__label">{label}</p>
        </div>
    }
}
