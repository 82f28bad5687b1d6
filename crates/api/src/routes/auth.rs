//! Admin login and logout routes.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{admin_session::LOGIN_PATH, AdminSession, IncomingFlash};
use crate::routes::{redirect_with_flash, render_page, INVITES_PATH};
use crate::services::flash::{INVALID_CREDENTIALS, LOGGED_IN, LOGGED_OUT};
use crate::services::{CookieHelper, Flash};
use crate::views::LoginPage;

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Show the login form, or go straight to the admin page when logged in.
///
/// GET /login
pub async fn login_page(
    State(state): State<AppState>,
    session: Option<AdminSession>,
    incoming: IncomingFlash,
) -> Response {
    if session.is_some() {
        return Redirect::to(INVITES_PATH).into_response();
    }

    let page = LoginPage {
        flash: incoming.flash.clone(),
    };
    render_page(&state, &incoming, page)
}

/// Check the admin credentials and start a session.
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    session: Option<AdminSession>,
    incoming: IncomingFlash,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    if session.is_some() {
        return Ok(Redirect::to(INVITES_PATH).into_response());
    }

    let username = form.username.as_deref().unwrap_or_default();
    let password = form.password.as_deref().unwrap_or_default();

    if !state.credentials.verify(username, password) {
        warn!(username = %username.trim(), "Admin login failed");
        let page = LoginPage {
            flash: Some(Flash::error(INVALID_CREDENTIALS)),
        };
        return Ok(render_page(&state, &incoming, page));
    }

    let token = state
        .sessions
        .issue_admin()
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    info!("Admin logged in");

    let mut response = redirect_with_flash(&state, INVITES_PATH, Flash::success(LOGGED_IN));
    CookieHelper::append(
        response.headers_mut(),
        &state
            .cookies
            .build_session_cookie(&token, state.sessions.lifetime_secs()),
    );
    Ok(response)
}

/// End the admin session.
///
/// GET /logout
pub async fn logout(State(state): State<AppState>) -> Response {
    info!("Admin logged out");

    let mut response = redirect_with_flash(&state, LOGIN_PATH, Flash::success(LOGGED_OUT));
    CookieHelper::append(
        response.headers_mut(),
        &state.cookies.build_clear_session_cookie(),
    );
    response
}
