//! Domain layer for the Marriage App backend.
//!
//! This crate contains:
//! - Domain models (Wish, Invite) and their input policies
//! - Store traits implemented by the persistence layer
//! - Guestbook and invite services, CSV export
//! - Domain error types

pub mod error;
pub mod models;
pub mod services;

pub use error::{ServiceError, StoreError};
