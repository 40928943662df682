//! Session store: the single source of truth for who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is created once at the app root, handed explicitly to the route
//! gate, and provided to views for read-only access. `initialize`, `login`,
//! `logout`, `signup` and `verify_email` are the only writers of the
//! identity.
//!
//! INVARIANTS
//! ==========
//! - `LoadState` moves `Pending -> Ready` exactly once and never reverts.
//! - Identity is replaced wholesale from a trusted response; role and
//!   verification flags are never edited locally.
//! - A failed call leaves the identity untouched.
//! - A boot check that settles after a newer login/logout keeps the newer
//!   identity and only flips the load state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::api::AuthApi;
use crate::net::error::ApiResult;
use crate::net::types::{AuthEnvelope, Identity, LoginRequest, SignupRequest};

/// Whether the boot identity check has settled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Ready,
}

/// Snapshot of the session: identity plus load state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    identity: Option<Identity>,
    load: LoadState,
    revision: u64,
}

impl SessionState {
    /// A session whose boot check has already settled.
    pub fn settled(identity: Option<Identity>) -> Self {
        Self { identity, load: LoadState::Ready, revision: 0 }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn is_ready(&self) -> bool {
        self.load == LoadState::Ready
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(Identity::is_admin)
    }

    pub fn is_verified(&self) -> bool {
        self.identity.as_ref().is_some_and(|i| i.verified)
    }

    /// Apply the boot check result. `started_at` is the revision observed
    /// when the check was issued.
    fn settle(&mut self, identity: Option<Identity>, started_at: u64) {
        if self.load == LoadState::Ready {
            return;
        }
        if self.revision == started_at {
            self.identity = identity;
        }
        self.load = LoadState::Ready;
    }

    /// Replace the identity if the envelope carries a trusted one.
    fn adopt(&mut self, envelope: &AuthEnvelope) -> bool {
        let Some(identity) = envelope.trusted_identity() else {
            return false;
        };
        self.identity = Some(identity.clone());
        self.revision += 1;
        true
    }

    fn clear(&mut self) {
        self.identity = None;
        self.revision += 1;
    }
}

/// Session store bound to an [`AuthApi`] implementation.
pub struct SessionStore<A> {
    api: Arc<A>,
    state: RwSignal<SessionState>,
    boot_started: Arc<AtomicBool>,
}

impl<A> Clone for SessionStore<A> {
    fn clone(&self) -> Self {
        Self { api: Arc::clone(&self.api), state: self.state, boot_started: Arc::clone(&self.boot_started) }
    }
}

impl<A: AuthApi> SessionStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            state: RwSignal::new(SessionState::default()),
            boot_started: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Reactive read-only view of the session.
    pub fn signal(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Validate the existing credential once and settle the load state.
    ///
    /// Success with a user sets the identity; `success: false`, a transport
    /// error or an undecodable payload all mean signed out. Only the first
    /// call does anything.
    pub async fn initialize(&self) {
        if self.boot_started.swap(true, Ordering::SeqCst) {
            return;
        }
        let started_at = self.state.with_untracked(|s| s.revision);
        let identity = match self.api.check_auth().await {
            Ok(envelope) => envelope.trusted_identity().cloned(),
            Err(e) => {
                log::debug!("session: identity check failed: {e}");
                None
            }
        };
        log::debug!("session: ready (authenticated: {})", identity.is_some());
        self.state.update(|s| s.settle(identity, started_at));
    }

    /// Submit credentials; adopt the returned identity on success.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure; the session is left unchanged.
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthEnvelope> {
        let envelope = self.api.login(credentials).await.inspect_err(|e| log::debug!("session: login failed: {e}"))?;
        self.adopt(&envelope);
        Ok(envelope)
    }

    /// Create an account; adopt the returned identity on success.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure; the session is left unchanged.
    pub async fn signup(&self, data: &SignupRequest) -> ApiResult<AuthEnvelope> {
        let envelope = self.api.signup(data).await.inspect_err(|e| log::debug!("session: signup failed: {e}"))?;
        self.adopt(&envelope);
        Ok(envelope)
    }

    /// Submit an email verification code; adopt the returned identity on success.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure; the session is left unchanged.
    pub async fn verify_email(&self, code: &str) -> ApiResult<AuthEnvelope> {
        let envelope =
            self.api.verify_email(code).await.inspect_err(|e| log::debug!("session: verify failed: {e}"))?;
        self.adopt(&envelope);
        Ok(envelope)
    }

    /// Ask the Authority to end the session, then clear the local identity.
    ///
    /// The identity is cleared once the call settles, whether or not it
    /// succeeded; the result is returned for information only.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure after the local identity is cleared.
    pub async fn logout(&self) -> ApiResult<()> {
        let result = self.api.logout().await;
        if let Err(e) = &result {
            log::warn!("session: logout call failed, clearing locally: {e}");
        }
        self.state.update(SessionState::clear);
        result
    }

    fn adopt(&self, envelope: &AuthEnvelope) {
        let mut adopted = false;
        self.state.update(|s| adopted = s.adopt(envelope));
        if adopted {
            log::debug!("session: identity replaced");
        }
    }
}
