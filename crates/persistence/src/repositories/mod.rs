//! Repository implementations for database operations.

pub mod invite;
pub mod wish;

pub use invite::InviteRepository;
pub use wish::WishRepository;
