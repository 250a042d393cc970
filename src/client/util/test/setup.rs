//! Declarative setup for session tests.
//!
//! `TestBuilder` seeds the in-memory browser storage and scripts the role API, then
//! `build()` hands back a `TestSetup` the session resolver and logout handler can run
//! against.

use crate::{
    client::{
        session::{resolver::SessionResolver, Resolution, SessionState},
        storage::{ACCESS_TOKEN_COOKIE, AUTH_TOKEN_KEY, USER_ROLE_KEY},
        util::test::{memory::MemoryStorage, role_lookup::StubResponse, StubRoleLookup},
    },
    model::user::UserRole,
};

/// Credential used by tests that only need one to be present
pub static TEST_CREDENTIAL: &str = "header.payload.signature";

pub struct TestBuilder {
    storage: MemoryStorage,
    response: StubResponse,
}

impl TestBuilder {
    /// Creates a builder with empty storage and a role API that cannot be reached.
    pub fn new() -> Self {
        Self {
            storage: MemoryStorage::new(),
            response: StubResponse::NetworkFailure,
        }
    }

    /// Uses storage that fails every operation instead of the empty in-memory store.
    ///
    /// Items and cookies added afterwards are kept but can no longer be read through
    /// the storage trait.
    pub fn with_failing_storage(mut self) -> Self {
        self.storage = MemoryStorage::failing();
        self
    }

    pub fn with_local_item(self, key: &str, value: &str) -> Self {
        self.storage.insert_item(key, value);
        self
    }

    /// Stores a credential under the local storage token key.
    pub fn with_credential(self, credential: &str) -> Self {
        self.with_local_item(AUTH_TOKEN_KEY, credential)
    }

    /// Stores a credential in the access token cookie.
    pub fn with_credential_cookie(self, credential: &str) -> Self {
        self.with_cookie(ACCESS_TOKEN_COOKIE, credential)
    }

    pub fn with_cookie(self, name: &str, value: &str) -> Self {
        self.storage.insert_cookie(name, value);
        self
    }

    /// Seeds the role cache as a previous successful lookup would have.
    pub fn with_cached_role(self, role: UserRole) -> Self {
        self.with_local_item(USER_ROLE_KEY, role.as_str())
    }

    /// Scripts the role API to answer with `status` and `body`.
    pub fn with_role_response(mut self, status: u16, body: &str) -> Self {
        self.response = StubResponse::Respond {
            status,
            body: body.to_string(),
        };
        self
    }

    /// Scripts a 200 response carrying `role`.
    pub fn with_role(self, role: UserRole) -> Self {
        let body = format!(r#"{{"data":{{"role":"{}"}}}}"#, role);
        self.with_role_response(200, &body)
    }

    /// Scripts the role API to be unreachable.
    pub fn with_network_failure(mut self) -> Self {
        self.response = StubResponse::NetworkFailure;
        self
    }

    pub fn build(self) -> TestSetup {
        TestSetup {
            storage: self.storage,
            lookup: StubRoleLookup::new(self.response),
        }
    }
}

pub struct TestSetup {
    pub storage: MemoryStorage,
    pub lookup: StubRoleLookup,
}

/// Outcome of running the resolver from a freshly mounted session
pub struct ResolvedSession {
    /// State after resolution finished
    pub state: SessionState,
    /// Every state the session passed through, starting with the initial one
    pub history: Vec<SessionState>,
    pub resolution: Option<Resolution>,
}

impl TestSetup {
    pub fn resolver(&self) -> SessionResolver<'_, MemoryStorage, StubRoleLookup> {
        SessionResolver::new(&self.storage, &self.lookup)
    }

    /// Resolves a new session, recording each state it moves through.
    pub async fn resolve(&self) -> ResolvedSession {
        self.resolve_from(SessionState::default()).await
    }

    /// Runs the resolver against a session already in `state`.
    pub async fn resolve_from(&self, mut state: SessionState) -> ResolvedSession {
        let mut history = vec![state];

        let resolution = self
            .resolver()
            .resolve(|event| {
                state.apply(event);
                history.push(state);
            })
            .await;

        ResolvedSession {
            state,
            history,
            resolution,
        }
    }
}
