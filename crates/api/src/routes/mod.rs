//! HTTP route handlers.

pub mod auth;
pub mod guestbook;
pub mod invites;

use axum::{
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;

use crate::app::AppState;
use crate::extractors::IncomingFlash;
use crate::services::{CookieHelper, Flash};

/// Admin landing page.
pub const INVITES_PATH: &str = "/admin/invites";

/// Render a page view. A flash cookie sent with the request is cleared,
/// since the page has now shown it.
pub(crate) fn render_page<T: Serialize>(
    state: &AppState,
    incoming: &IncomingFlash,
    view: T,
) -> Response {
    let mut response = Json(view).into_response();
    if incoming.cookie_present {
        CookieHelper::append(
            response.headers_mut(),
            &state.cookies.build_clear_flash_cookie(),
        );
    }
    response
}

/// `303 See Other` to `to`, leaving `flash` for the next page view.
pub(crate) fn redirect_with_flash(state: &AppState, to: &str, flash: Flash) -> Response {
    let mut response = Redirect::to(to).into_response();
    CookieHelper::append(
        response.headers_mut(),
        &state.cookies.build_flash_cookie(&flash),
    );
    response
}
