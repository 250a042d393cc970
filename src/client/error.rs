//! Error type for the VisionTrack client.
//!
//! None of these errors are ever shown to the user. Storage and lookup failures are
//! absorbed by the session resolver and the logout handler, which degrade to a best
//! effort guess at the login state and log what went wrong.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The browser offers no local storage or cookie jar (non-web renderer, private mode).
    #[error("Browser storage is unavailable")]
    StorageUnavailable,
    /// Reading or writing local storage or a cookie was rejected by the browser.
    #[error("Failed to access browser storage: {0}")]
    StorageError(String),
    /// The role lookup request could not be sent or its body could not be read.
    #[error("Failed to send request: {0}")]
    RequestError(String),
    /// The role lookup succeeded but its body was not valid JSON.
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    #[error("Invalid value for {var}: {reason}")]
    InvalidConfigValue { var: String, reason: String },
}
