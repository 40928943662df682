//! Normalized failure type for every gateway call.
//!
//! ERROR HANDLING
//! ==============
//! Views and the session store branch on one `Result`. A failure keeps the
//! server-supplied message when the Authority sent one, so the login form
//! can show it inline; otherwise callers fall back to their own generic text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// 401 from any endpoint. Surfaced untouched; no global sign-out.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },
    /// Any other non-2xx status.
    #[error("request failed: {status}")]
    Rejected { status: u16, message: Option<String> },
    /// A 2xx envelope that reported `success: false`.
    #[error("request refused")]
    Refused { message: Option<String> },
    /// The body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (server-side render).
    #[error("not available on server")]
    Unavailable,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Rejected { message, .. } | Self::Refused { message } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            Self::Transport(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }

    /// Text to show the user: the server message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
