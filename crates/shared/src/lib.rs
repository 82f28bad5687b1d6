//! Shared utilities and common types for the Marriage App backend.
//!
//! This crate provides functionality used across the other crates:
//! - Signed admin session tokens
//! - Form text validation helpers

pub mod session;
pub mod validation;
