//! Guestbook wish models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::trim_field;
use validator::Validate;

/// Maximum length of a wish author name (characters).
pub const MAX_WISH_NAME_LENGTH: u64 = 100;

/// A guestbook entry. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Wish {
    pub id: i64,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Raw guestbook form submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WishForm {
    pub name: Option<String>,
    pub message: Option<String>,
}

/// A trimmed guestbook submission awaiting validation.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewWish {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub message: String,
}

impl NewWish {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: trim_field(Some(name)),
            message: trim_field(Some(message)),
        }
    }
}

impl From<&WishForm> for NewWish {
    fn from(form: &WishForm) -> Self {
        Self {
            name: trim_field(form.name.as_deref()),
            message: trim_field(form.message.as_deref()),
        }
    }
}
