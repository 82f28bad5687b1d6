//! Admin session extractor.
//!
//! Handlers that take an [`AdminSession`] only run for a logged-in admin.
//! Anyone else is sent to the login page.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use shared::session::{SessionClaims, SessionError};
use tracing::debug;

use crate::app::AppState;
use crate::services::CookieHelper;

/// Where unauthenticated admin requests are redirected.
pub const LOGIN_PATH: &str = "/login";

/// A valid, unexpired admin session.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub claims: SessionClaims,
}

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = CookieHelper::extract_session(&parts.headers) else {
            return Err(Redirect::to(LOGIN_PATH));
        };

        match state.sessions.verify_admin(token) {
            Ok(claims) => Ok(AdminSession { claims }),
            Err(SessionError::Expired) => {
                debug!("Admin session expired");
                Err(Redirect::to(LOGIN_PATH))
            }
            Err(err) => {
                debug!(error = %err, "Rejected admin session");
                Err(Redirect::to(LOGIN_PATH))
            }
        }
    }
}
