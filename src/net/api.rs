//! API gateway: the single path every server call goes through.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sent with
//! `credentials: include` so the session cookie rides along and callers
//! never touch tokens.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable`, since
//! the session cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Status classification lives in the pure `decode_response` so it can be
//! tested natively. A 401 is logged and returned untouched; reacting to it
//! (re-check, sign out) is the caller's decision.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiResult};
use super::types::{
    Ack, AuthEnvelope, Category, CategoryList, Event, EventEnvelope, EventList, EventQuery, EventStatus, LoginRequest,
    RegisterRequest, Registration, RegistrationList, SignupRequest, StatusUpdate, UserList, UserRecord,
    VerifyEmailRequest,
};
use crate::config;

const CHECK_AUTH: &str = "/user/check-auth";
const LOGIN: &str = "/user/login";
const LOGOUT: &str = "/user/logout";
const SIGNUP: &str = "/user/signup";
const VERIFY_EMAIL: &str = "/user/verify-email";
const USERS: &str = "/user/user";
const EVENTS: &str = "/events";
const CATEGORIES: &str = "/categories";
const REGISTRATIONS: &str = "/registrations";
const MY_REGISTRATIONS: &str = "/registrations/mine";

fn event_endpoint(id: &str) -> String {
    format!("{EVENTS}/{}", urlencoding::encode(id))
}

fn event_status_endpoint(id: &str) -> String {
    format!("{}/status", event_endpoint(id))
}

fn registration_endpoint(id: &str) -> String {
    format!("{REGISTRATIONS}/{}", urlencoding::encode(id))
}

fn event_registrations_endpoint(event_id: &str) -> String {
    format!("{REGISTRATIONS}/event/{}", urlencoding::encode(event_id))
}

/// Pull `message` out of a JSON error body, if there is one.
fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_owned)
}

/// Classify a finished HTTP exchange and decode the 2xx body as `T`.
///
/// # Errors
///
/// `Unauthorized` for 401, `Rejected` for other non-2xx statuses, `Decode`
/// when a 2xx body does not match `T`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Classify a finished HTTP exchange, ignoring the body on success.
///
/// # Errors
///
/// Same status mapping as [`decode_response`].
pub fn check_status(status: u16, body: &str) -> ApiResult<()> {
    match status {
        200..=299 => Ok(()),
        401 => {
            log::warn!("api: unauthorized response");
            Err(ApiError::Unauthorized { message: body_message(body) })
        }
        _ => Err(ApiError::Rejected { status, message: body_message(body) }),
    }
}

/// Turn a 2xx `success: false` auth envelope into `ApiError::Refused`.
///
/// # Errors
///
/// Returns `Refused` carrying the server message when `success` is false.
pub fn accept_envelope(envelope: AuthEnvelope) -> ApiResult<AuthEnvelope> {
    if envelope.success {
        Ok(envelope)
    } else {
        Err(ApiError::Refused { message: envelope.message })
    }
}

fn accept_flag(success: bool, message: Option<String>) -> ApiResult<()> {
    if success { Ok(()) } else { Err(ApiError::Refused { message }) }
}

/// Auth operations the session store depends on.
///
/// `check_auth` returns the raw envelope (the store treats `success: false`
/// like any failure); the mutating calls return `Refused` for a
/// `success: false` reply.
#[allow(async_fn_in_trait)]
pub trait AuthApi: Send + Sync + 'static {
    async fn check_auth(&self) -> ApiResult<AuthEnvelope>;
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthEnvelope>;
    async fn logout(&self) -> ApiResult<()>;
    async fn signup(&self, data: &SignupRequest) -> ApiResult<AuthEnvelope>;
    async fn verify_email(&self, code: &str) -> ApiResult<AuthEnvelope>;
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Delete,
}

/// Browser HTTP implementation of the gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpGateway {
    base: String,
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new(config::API_BASE)
    }
}

impl HttpGateway {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn url(&self, path: &str) -> String {
        config::join_url(&self.base, path)
    }

    /// Send one request and hand back the raw status and body text.
    async fn exchange(
        &self,
        verb: Verb,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<serde_json::Value>,
    ) -> ApiResult<(u16, String)> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestCredentials;

            let url = self.url(path);
            let builder = match verb {
                Verb::Get => Request::get(&url),
                Verb::Post => Request::post(&url),
                Verb::Delete => Request::delete(&url),
            }
            .credentials(RequestCredentials::Include)
            .query(query.iter().map(|(k, v)| (*k, v.as_str())));
            let request = match body {
                Some(body) => builder.json(&body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;
            let resp = request.send().await.map_err(|e| {
                log::warn!("api: {verb:?} {path} failed: {e}");
                ApiError::Transport(e.to_string())
            })?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            log::debug!("api: {verb:?} {path} -> {status}");
            Ok((status, text))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, query, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&'static str, String)]) -> ApiResult<T> {
        let (status, text) = self.exchange(Verb::Get, path, query, None).await?;
        decode_response(status, &text)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let (status, text) = self.exchange(Verb::Post, path, &[], Some(body)).await?;
        decode_response(status, &text)
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let (status, text) = self.exchange(Verb::Delete, path, &[], None).await?;
        decode_response(status, &text)
    }

    /// `GET /events` with filters and pagination.
    ///
    /// # Errors
    ///
    /// Any gateway failure, or `Refused` when the listing reports failure.
    pub async fn list_events(&self, query: &EventQuery) -> ApiResult<EventList> {
        let list: EventList = self.get(EVENTS, &query.to_pairs()).await?;
        accept_flag(list.success, None)?;
        Ok(list)
    }

    /// `GET /events/{id}`.
    ///
    /// # Errors
    ///
    /// Any gateway failure, or `Refused` when no event came back.
    pub async fn get_event(&self, id: &str) -> ApiResult<Event> {
        let envelope: EventEnvelope = self.get(&event_endpoint(id), &[]).await?;
        match envelope.event {
            Some(event) if envelope.success => Ok(event),
            _ => Err(ApiError::Refused { message: envelope.message }),
        }
    }

    /// `POST /events/{id}/status` (admin). Returns the updated event.
    ///
    /// # Errors
    ///
    /// Any gateway failure, or `Refused` when the update was not applied.
    pub async fn update_event_status(&self, id: &str, status: EventStatus) -> ApiResult<Event> {
        let envelope: EventEnvelope = self.post(&event_status_endpoint(id), &StatusUpdate { status }).await?;
        match envelope.event {
            Some(event) if envelope.success => Ok(event),
            _ => Err(ApiError::Refused { message: envelope.message }),
        }
    }

    /// `GET /categories`.
    ///
    /// # Errors
    ///
    /// Any gateway failure.
    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let list: CategoryList = self.get(CATEGORIES, &[]).await?;
        accept_flag(list.success, None)?;
        Ok(list.categories)
    }

    /// `POST /registrations` for the signed-in student.
    ///
    /// # Errors
    ///
    /// Any gateway failure, or `Refused` with the server's reason.
    pub async fn register_for_event(&self, event_id: &str) -> ApiResult<()> {
        let ack: Ack = self.post(REGISTRATIONS, &RegisterRequest { event_id: event_id.to_owned() }).await?;
        accept_flag(ack.success, ack.message)
    }

    /// `GET /registrations/mine`.
    ///
    /// # Errors
    ///
    /// Any gateway failure.
    pub async fn my_registrations(&self) -> ApiResult<Vec<Registration>> {
        let list: RegistrationList = self.get(MY_REGISTRATIONS, &[]).await?;
        accept_flag(list.success, None)?;
        Ok(list.registrations)
    }

    /// `DELETE /registrations/{id}`.
    ///
    /// # Errors
    ///
    /// Any gateway failure, or `Refused` with the server's reason.
    pub async fn cancel_registration(&self, id: &str) -> ApiResult<()> {
        let ack: Ack = self.delete(&registration_endpoint(id)).await?;
        accept_flag(ack.success, ack.message)
    }

    /// `GET /registrations/event/{event_id}` (admin).
    ///
    /// # Errors
    ///
    /// Any gateway failure.
    pub async fn event_registrations(&self, event_id: &str) -> ApiResult<Vec<Registration>> {
        let list: RegistrationList = self.get(&event_registrations_endpoint(event_id), &[]).await?;
        accept_flag(list.success, None)?;
        Ok(list.registrations)
    }

    /// `GET /user/user` (admin).
    ///
    /// # Errors
    ///
    /// Any gateway failure.
    pub async fn list_users(&self) -> ApiResult<Vec<UserRecord>> {
        let list: UserList = self.get(USERS, &[]).await?;
        accept_flag(list.success, None)?;
        Ok(list.users)
    }
}

impl AuthApi for HttpGateway {
    async fn check_auth(&self) -> ApiResult<AuthEnvelope> {
        self.get(CHECK_AUTH, &[]).await
    }

    async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthEnvelope> {
        accept_envelope(self.post(LOGIN, credentials).await?)
    }

    async fn logout(&self) -> ApiResult<()> {
        let (status, text) = self.exchange(Verb::Get, LOGOUT, &[], None).await?;
        check_status(status, &text)
    }

    async fn signup(&self, data: &SignupRequest) -> ApiResult<AuthEnvelope> {
        accept_envelope(self.post(SIGNUP, data).await?)
    }

    async fn verify_email(&self, code: &str) -> ApiResult<AuthEnvelope> {
        let body = VerifyEmailRequest { code: code.to_owned() };
        accept_envelope(self.post(VERIFY_EMAIL, &body).await?)
    }
}
