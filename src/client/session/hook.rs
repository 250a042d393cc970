use dioxus::prelude::*;

use crate::client::{
    api::role::HttpRoleLookup,
    config::Config,
    session::{resolver::SessionResolver, state::SessionState},
    storage::BrowserStorage,
};

/// Provides a fresh [`SessionState`] to the component tree and resolves it once.
///
/// The resolution runs as a task owned by the calling component, so unmounting the
/// component cancels an in flight role lookup instead of letting it update a view that
/// no longer exists.
pub fn use_session_provider() -> Signal<SessionState> {
    let mut session = use_context_provider(|| Signal::new(SessionState::default()));
    let config = use_context::<Config>();

    use_hook(move || {
        spawn(async move {
            let storage = BrowserStorage;
            let lookup = HttpRoleLookup::new(&config);

            SessionResolver::new(&storage, &lookup)
                .resolve(|event| {
                    session.write().apply(event);
                })
                .await;
        })
    });

    session
}

/// Hook to access the session provided by the navbar.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}
