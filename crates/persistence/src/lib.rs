//! Persistence layer for the Marriage App backend.
//!
//! This crate contains:
//! - MySQL connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations of the domain store traits
//! - Schema bootstrap and the legacy invite schema repair

pub mod db;
pub mod entities;
pub mod query_timer;
pub mod repair;
pub mod repositories;
pub mod schema;
