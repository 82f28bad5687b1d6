//! Pending flash extractor.

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::services::{CookieHelper, Flash, FLASH_COOKIE};

/// The flash left by the previous response, if any.
#[derive(Debug, Clone, Default)]
pub struct IncomingFlash {
    pub flash: Option<Flash>,
    /// A flash cookie was sent, readable or not. Page views clear it.
    pub cookie_present: bool,
}

#[async_trait]
impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = CookieHelper::extract_cookie(&parts.headers, FLASH_COOKIE);
        Ok(IncomingFlash {
            flash: raw.and_then(Flash::decode),
            cookie_present: raw.is_some(),
        })
    }
}
