//! Custom Axum extractors.

pub mod admin_session;
pub mod flash;

pub use admin_session::AdminSession;
pub use flash::IncomingFlash;
