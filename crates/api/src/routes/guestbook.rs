//! Public guestbook routes.

use std::path::Path;

use axum::{
    extract::State,
    response::Response,
    Form,
};
use domain::models::WishForm;
use domain::ServiceError;
use tracing::debug;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::IncomingFlash;
use crate::routes::{redirect_with_flash, render_page};
use crate::services::flash::{WISH_INVALID, WISH_SAVED};
use crate::services::Flash;
use crate::views::GuestbookPage;

/// Served from the static directory when present.
const BACKGROUND_IMAGE: &str = "images/background.jpg";

async fn background_image_url(static_dir: &str) -> Option<String> {
    let path = Path::new(static_dir).join(BACKGROUND_IMAGE);
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => Some(format!("/static/{}", BACKGROUND_IMAGE)),
        _ => None,
    }
}

async fn guestbook_page(state: &AppState, flash: Option<Flash>) -> Result<GuestbookPage, ApiError> {
    let wishes = state.wishes.list_wishes().await?;
    let site = &state.config.site;

    Ok(GuestbookPage {
        flash,
        wishes,
        barat: site.barat.clone(),
        walima: site.walima.clone(),
        gallery_url: site.gallery_url.clone(),
        background_image_url: background_image_url(&site.static_dir).await,
    })
}

/// Show the guestbook.
///
/// GET /
pub async fn view(
    State(state): State<AppState>,
    incoming: IncomingFlash,
) -> Result<Response, ApiError> {
    let page = guestbook_page(&state, incoming.flash.clone()).await?;
    Ok(render_page(&state, &incoming, page))
}

/// Record a wish.
///
/// POST /
pub async fn submit(
    State(state): State<AppState>,
    incoming: IncomingFlash,
    Form(form): Form<WishForm>,
) -> Result<Response, ApiError> {
    let name = form.name.as_deref().unwrap_or_default();
    let message = form.message.as_deref().unwrap_or_default();

    match state.wishes.create_wish(name, message).await {
        Ok(_) => Ok(redirect_with_flash(&state, "/", Flash::success(WISH_SAVED))),
        Err(ServiceError::Validation(reason)) => {
            debug!(reason = %reason, "Guestbook submission rejected");
            let page = guestbook_page(&state, Some(Flash::error(WISH_INVALID))).await?;
            Ok(render_page(&state, &incoming, page))
        }
        Err(err) => Err(err.into()),
    }
}
