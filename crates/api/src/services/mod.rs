//! Request-side services: admin credentials, cookies and flash messages.

pub mod auth;
pub mod cookies;
pub mod flash;

pub use auth::{session_signer, AdminCredentials};
pub use cookies::{CookieHelper, FLASH_COOKIE, SESSION_COOKIE};
pub use flash::{Flash, FlashKind};
