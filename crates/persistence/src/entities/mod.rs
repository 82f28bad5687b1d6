//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod invite;
pub mod wish;

pub use invite::InviteEntity;
pub use wish::WishEntity;
