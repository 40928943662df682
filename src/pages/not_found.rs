use leptos::prelude::*;

use crate::routes::paths;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href=paths::HOME class="button">"Go home"</a>
        </div>
    }
}
