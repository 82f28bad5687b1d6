//! Page view models.
//!
//! Pages are rendered as JSON documents; a presentation layer turns them
//! into HTML.

use domain::models::{Invite, Wish};
use serde::Serialize;

use crate::config::CeremonyConfig;
use crate::services::Flash;

/// `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct GuestbookPage {
    pub flash: Option<Flash>,
    /// Newest first.
    pub wishes: Vec<Wish>,
    pub barat: CeremonyConfig,
    pub walima: CeremonyConfig,
    pub gallery_url: String,
    /// Set only when `images/background.jpg` exists in the static directory.
    pub background_image_url: Option<String>,
}

/// `GET /login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginPage {
    pub flash: Option<Flash>,
}

/// `GET /admin/invites`
#[derive(Debug, Clone, Serialize)]
pub struct InvitesPage {
    pub flash: Option<Flash>,
    /// Oldest first.
    pub invites: Vec<Invite>,
    pub total_invited_people: i64,
}
