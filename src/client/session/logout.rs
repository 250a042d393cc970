use dioxus_logger::tracing;

use crate::client::{
    router::Route,
    session::state::{SessionEvent, SessionState},
    storage::{cookies, SessionStorage, SESSION_COOKIES, SESSION_STORAGE_KEYS},
};

/// Removes every credential and profile entry the login flow leaves in the browser.
///
/// Each entry is cleared independently; a failure is logged and the remaining entries
/// are still cleared.
pub fn clear_session_storage<S: SessionStorage>(storage: &S) {
    for key in SESSION_STORAGE_KEYS {
        if let Err(err) = storage.remove_item(key) {
            tracing::debug!("Failed to remove {} from local storage: {}", key, err);
        }
    }

    for name in SESSION_COOKIES {
        if let Err(err) = storage.set_cookie(&cookies::expired_cookie(name)) {
            tracing::debug!("Failed to expire cookie {}: {}", name, err);
        }
    }
}

/// Logs the user out.
///
/// Clears the stored session, moves `session` to the logged out state and closes the
/// mobile menu. Never fails; storage errors are swallowed so the user always ends up
/// on the login page.
///
/// # Returns
/// - `Route::Login` - The route to redirect to
pub fn logout<S: SessionStorage>(
    storage: &S,
    session: &mut SessionState,
    menu_open: &mut bool,
) -> Route {
    clear_session_storage(storage);

    session.apply(SessionEvent::LoggedOut);
    *menu_open = false;

    Route::Login {}
}
