//! Single-admin credential check and session signer setup.

use shared::session::{SessionSigner, SESSION_LIFETIME_SECS};
use tracing::warn;

use crate::config::AdminConfig;

/// The configured admin username and password.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(config: &AdminConfig) -> Self {
        if config.password.is_empty() {
            warn!("ROOT_PASSWORD is not set; the admin logs in with an empty password");
        }

        Self {
            username: config.username.trim().to_string(),
            password: config.password.clone(),
        }
    }

    /// Checks submitted credentials. Inputs are trimmed; the username is
    /// compared case-insensitively and the password exactly.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let username_ok = username.trim().to_lowercase() == self.username.to_lowercase();
        let password_ok = password.trim() == self.password;
        username_ok && password_ok
    }
}

/// Builds the session signer, generating a throwaway secret when none is configured.
///
/// With a generated secret, sessions do not survive a restart.
pub fn session_signer(config: &AdminConfig) -> SessionSigner {
    let secret = if config.secret_key.is_empty() {
        warn!("SECRET_KEY is not set; using a random secret for this process");
        SessionSigner::generate_secret()
    } else {
        config.secret_key.clone()
    };

    SessionSigner::new(&secret, SESSION_LIFETIME_SECS)
}
