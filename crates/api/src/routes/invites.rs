//! Admin invite tracker routes. Every handler requires an [`AdminSession`].

use axum::{
    extract::{Path, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
    Form,
};
use domain::models::{total_invited_people, InviteForm};
use domain::services::INVITES_CSV_FILENAME;
use domain::ServiceError;
use tracing::{debug, info};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AdminSession, IncomingFlash};
use crate::routes::{redirect_with_flash, render_page, INVITES_PATH};
use crate::services::flash::{
    INVITE_DELETED, INVITE_INVALID, INVITE_NOT_FOUND, INVITE_SAVED, INVITE_UPDATED,
};
use crate::services::Flash;
use crate::views::InvitesPage;

async fn invites_page(state: &AppState, flash: Option<Flash>) -> Result<InvitesPage, ApiError> {
    let invites = state.invites.list_invites().await?;
    let total = total_invited_people(&invites);

    Ok(InvitesPage {
        flash,
        invites,
        total_invited_people: total,
    })
}

/// List invites with the running headcount.
///
/// GET /admin/invites
pub async fn list(
    _admin: AdminSession,
    State(state): State<AppState>,
    incoming: IncomingFlash,
) -> Result<Response, ApiError> {
    let page = invites_page(&state, incoming.flash.clone()).await?;
    Ok(render_page(&state, &incoming, page))
}

/// Add an invite.
///
/// POST /admin/invites
pub async fn create(
    _admin: AdminSession,
    State(state): State<AppState>,
    incoming: IncomingFlash,
    Form(form): Form<InviteForm>,
) -> Result<Response, ApiError> {
    let person = form.person_name.as_deref().unwrap_or_default();
    let village = form.village_name.as_deref().unwrap_or_default();

    match state
        .invites
        .create_invite(person, village, form.total_people.as_deref())
        .await
    {
        Ok(_) => Ok(redirect_with_flash(
            &state,
            INVITES_PATH,
            Flash::success(INVITE_SAVED),
        )),
        Err(ServiceError::Validation(reason)) => {
            debug!(reason = %reason, "Invite rejected");
            let page = invites_page(&state, Some(Flash::error(INVITE_INVALID))).await?;
            Ok(render_page(&state, &incoming, page))
        }
        Err(err) => Err(err.into()),
    }
}

/// Replace an invite's fields. Omitted fields keep their current values.
///
/// POST /admin/invites/:id/edit
pub async fn edit(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<InviteForm>,
) -> Result<Response, ApiError> {
    let result = state
        .invites
        .update_invite(
            id,
            form.person_name.as_deref(),
            form.village_name.as_deref(),
            form.total_people.as_deref(),
        )
        .await;

    let flash = match result {
        Ok(_) => Flash::success(INVITE_UPDATED),
        Err(ServiceError::NotFound(_)) => Flash::error(INVITE_NOT_FOUND),
        Err(ServiceError::Validation(reason)) => {
            debug!(invite_id = id, reason = %reason, "Invite update rejected");
            Flash::error(INVITE_INVALID)
        }
        Err(err) => return Err(err.into()),
    };
    Ok(redirect_with_flash(&state, INVITES_PATH, flash))
}

/// Delete an invite. An unknown id only produces a flash.
///
/// GET /admin/invites/:id/delete
pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let flash = match state.invites.delete_invite(id).await {
        Ok(()) => Flash::success(INVITE_DELETED),
        Err(ServiceError::NotFound(_)) => Flash::error(INVITE_NOT_FOUND),
        Err(err) => return Err(err.into()),
    };
    Ok(redirect_with_flash(&state, INVITES_PATH, flash))
}

/// Download every invite as CSV, oldest first.
///
/// GET /admin/invites/export.csv
pub async fn export_csv(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let body = state.invites.export_csv().await?;
    info!(bytes = body.len(), "Invite CSV exported");

    Ok((
        [
            (CONTENT_TYPE, "text/csv".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename={}", INVITES_CSV_FILENAME),
            ),
        ],
        body,
    )
        .into_response())
}
