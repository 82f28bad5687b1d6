//! Cookie helper for the admin session and flash cookies.

use axum::http::{
    header::{COOKIE, SET_COOKIE},
    HeaderMap, HeaderValue,
};

use crate::config::CookieConfig;
use crate::services::flash::Flash;

/// Holds the signed admin session token.
pub const SESSION_COOKIE: &str = "ma_session";

/// Holds the pending flash message.
pub const FLASH_COOKIE: &str = "ma_flash";

const SAME_SITE: &str = "Lax";

/// Builds and reads the application's cookies.
#[derive(Debug, Clone)]
pub struct CookieHelper {
    secure: bool,
}

impl CookieHelper {
    pub fn new(config: &CookieConfig) -> Self {
        Self {
            secure: config.secure,
        }
    }

    /// Set-Cookie value for a session token valid for `max_age_secs`.
    pub fn build_session_cookie(&self, token: &str, max_age_secs: i64) -> String {
        self.build_cookie(SESSION_COOKIE, token, Some(max_age_secs))
    }

    pub fn build_clear_session_cookie(&self) -> String {
        self.build_clear_cookie(SESSION_COOKIE)
    }

    /// Set-Cookie value carrying a flash until the browser session ends or it is shown.
    pub fn build_flash_cookie(&self, flash: &Flash) -> String {
        self.build_cookie(FLASH_COOKIE, &flash.encode(), None)
    }

    pub fn build_clear_flash_cookie(&self) -> String {
        self.build_clear_cookie(FLASH_COOKIE)
    }

    /// Append a Set-Cookie header.
    pub fn append(headers: &mut HeaderMap, cookie: &str) {
        if let Ok(value) = HeaderValue::from_str(cookie) {
            headers.append(SET_COOKIE, value);
        }
    }

    /// Extract a cookie value from request headers by name.
    pub fn extract_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .flat_map(|cookie_header| cookie_header.split(';'))
            .map(|s| s.trim())
            .find_map(|cookie| {
                let (cookie_name, cookie_value) = cookie.split_once('=')?;
                (cookie_name == name && !cookie_value.is_empty()).then_some(cookie_value)
            })
    }

    pub fn extract_session(headers: &HeaderMap) -> Option<&str> {
        Self::extract_cookie(headers, SESSION_COOKIE)
    }

    fn build_cookie(&self, name: &str, value: &str, max_age_secs: Option<i64>) -> String {
        let mut cookie = format!("{}={}; Path=/", name, value);
        if let Some(max_age) = max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }
        self.push_attributes(&mut cookie);
        cookie
    }

    fn build_clear_cookie(&self, name: &str) -> String {
        let mut cookie = format!(
            "{}=; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
            name
        );
        self.push_attributes(&mut cookie);
        cookie
    }

    fn push_attributes(&self, cookie: &mut String) {
        cookie.push_str("; HttpOnly");
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", SAME_SITE));
    }
}
