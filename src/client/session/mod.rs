//! Client side session handling for the navbar.
//!
//! On mount the navbar reads the stored credential, confirms it with the role API and
//! settles into a terminal [`SessionState`]. The state is shared with the rest of the
//! page through Dioxus context, rendered through [`SessionView`] and torn down by
//! [`logout`].

pub mod hook;
pub mod logout;
pub mod resolver;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;

pub use hook::{use_session, use_session_provider};
pub use logout::logout;
pub use resolver::SessionResolver;
pub use state::{FallbackReason, Resolution, SessionEvent, SessionState};
pub use view::{NavAction, SessionView};
