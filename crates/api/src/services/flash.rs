//! One-shot flash messages.
//!
//! A flash is set on a redirect and shown by the next page view, which then
//! clears it. It travels as base64url-encoded JSON in a cookie.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

pub const WISH_INVALID: &str = "Please fill in both Name and Message.";
pub const WISH_SAVED: &str = "Thank you for your wishes! 💌";
pub const INVITE_INVALID: &str = "Please provide valid details.";
pub const INVITE_SAVED: &str = "Invite saved.";
pub const INVITE_UPDATED: &str = "Invite updated.";
pub const INVITE_DELETED: &str = "Invite deleted.";
pub const INVITE_NOT_FOUND: &str = "Invite not found.";
pub const LOGGED_IN: &str = "Logged in successfully.";
pub const LOGGED_OUT: &str = "Logged out.";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: &str) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.to_string(),
        }
    }

    /// Cookie-safe encoding.
    pub fn encode(&self) -> String {
        // Serializing two plain fields cannot fail.
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Returns `None` for anything that is not a flash produced by [`Flash::encode`].
    pub fn decode(value: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}
