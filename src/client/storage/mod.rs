//! Browser persisted session data.
//!
//! The login flow (outside this crate) leaves the credential, refresh token, role cache
//! and employee profile in local storage and/or cookies. This module names those entries
//! and provides the [`SessionStorage`] seam the session resolver and logout handler work
//! against, so they can run against [`BrowserStorage`] in the browser and an in-memory
//! store in tests.

pub mod browser;
pub mod cookies;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;

use crate::{client::error::Error, model::user::UserRole};

pub use browser::BrowserStorage;

/// Local storage key holding the bearer credential
pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Local storage key caching the last role confirmed by the role API
pub const USER_ROLE_KEY: &str = "user_role";
pub const EMPLOYEE_EMAIL_KEY: &str = "employee_email";
pub const EMPLOYEE_NAME_KEY: &str = "employee_name";

/// Cookie holding the bearer credential when local storage does not
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Every local storage entry removed on logout
pub const SESSION_STORAGE_KEYS: [&str; 5] = [
    AUTH_TOKEN_KEY,
    REFRESH_TOKEN_KEY,
    USER_ROLE_KEY,
    EMPLOYEE_EMAIL_KEY,
    EMPLOYEE_NAME_KEY,
];

/// Every cookie expired on logout
pub const SESSION_COOKIES: [&str; 2] = [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE];

/// Synchronous access to local storage and the document cookie jar.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error>;

    fn remove_item(&self, key: &str) -> Result<(), Error>;

    /// Returns the raw cookie string in `name=value; name=value` form, as `document.cookie` does.
    fn cookies(&self) -> Result<String, Error>;

    /// Writes a single `Set-Cookie` style string, as assigning `document.cookie` does.
    fn set_cookie(&self, cookie: &str) -> Result<(), Error>;
}

/// Reads the current credential, preferring local storage over the `access_token` cookie.
///
/// Empty values count as absent in both sources. Storage failures are logged and treated
/// as an absent credential so the navbar falls back to the logged out view.
pub fn read_credential<S: SessionStorage>(storage: &S) -> Option<String> {
    let stored = storage.get_item(AUTH_TOKEN_KEY).unwrap_or_else(|err| {
        tracing::warn!("Failed to read {} from local storage: {}", AUTH_TOKEN_KEY, err);
        None
    });

    if let Some(token) = stored.filter(|token| !token.is_empty()) {
        return Some(token);
    }

    match storage.cookies() {
        Ok(jar) => cookies::find_cookie(&jar, ACCESS_TOKEN_COOKIE),
        Err(err) => {
            tracing::warn!("Failed to read cookies: {}", err);
            None
        }
    }
}

/// Reads the role cached by a previous successful lookup, ignoring unknown role names.
pub fn read_cached_role<S: SessionStorage>(storage: &S) -> Option<UserRole> {
    match storage.get_item(USER_ROLE_KEY) {
        Ok(value) => value.as_deref().and_then(UserRole::parse),
        Err(err) => {
            tracing::warn!("Failed to read {} from local storage: {}", USER_ROLE_KEY, err);
            None
        }
    }
}

/// Caches a role confirmed by the role API for use when the API is unreachable.
pub fn cache_role<S: SessionStorage>(storage: &S, role: UserRole) -> Result<(), Error> {
    storage.set_item(USER_ROLE_KEY, role.as_str())
}
