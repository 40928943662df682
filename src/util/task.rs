//! Fire-and-forget async work for event handlers.

use std::future::Future;

/// Run `fut` on the browser event loop. On the server the future is dropped,
/// since handlers never fire during SSR and the gateway is browser-only.
pub fn spawn_in_browser<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
