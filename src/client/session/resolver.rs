use dioxus_logger::tracing;

use crate::client::{
    api::role::{RoleLookup, RoleLookupResponse},
    session::state::{FallbackReason, Resolution, SessionEvent},
    storage::{self, SessionStorage},
};

/// Works out whether the visitor is logged in, and as whom, from what the browser stored.
///
/// A resolver performs one resolution per call to [`resolve`](SessionResolver::resolve);
/// the navbar calls it once per mount.
pub struct SessionResolver<'a, S, L> {
    storage: &'a S,
    lookup: &'a L,
}

impl<'a, S: SessionStorage, L: RoleLookup> SessionResolver<'a, S, L> {
    pub fn new(storage: &'a S, lookup: &'a L) -> Self {
        Self { storage, lookup }
    }

    /// Resolves the session, reporting each transition through `dispatch`.
    ///
    /// Dispatches [`SessionEvent::CredentialMissing`] and returns without contacting the
    /// API when no credential is stored. Otherwise dispatches
    /// [`SessionEvent::CredentialFound`], waits for the role lookup and finishes with
    /// exactly one [`SessionEvent::Resolved`].
    ///
    /// # Returns
    /// - `None` - No credential was stored
    /// - `Some(Resolution)` - Outcome of checking the stored credential
    pub async fn resolve<F>(&self, mut dispatch: F) -> Option<Resolution>
    where
        F: FnMut(SessionEvent),
    {
        let Some(credential) = storage::read_credential(self.storage) else {
            tracing::debug!("No stored credential, session is logged out");
            dispatch(SessionEvent::CredentialMissing);
            return None;
        };

        dispatch(SessionEvent::CredentialFound);

        let resolution = self.resolve_credential(&credential).await;
        tracing::info!("Session resolved: {:?}", resolution);

        dispatch(SessionEvent::Resolved(resolution));

        Some(resolution)
    }

    /// Checks a credential against the role API, falling back to the cached role.
    ///
    /// A confirmed role is written to the role cache. A rejected credential is left in
    /// storage untouched.
    pub async fn resolve_credential(&self, credential: &str) -> Resolution {
        match self.lookup.fetch_role(credential).await {
            Ok(RoleLookupResponse::Success(Some(role))) => {
                if let Err(err) = storage::cache_role(self.storage, role) {
                    tracing::warn!("Failed to cache user role {}: {}", role, err);
                }

                Resolution::Resolved { role }
            }
            // Accepted credential without a role still counts as logged in
            Ok(RoleLookupResponse::Success(None)) => Resolution::FallbackResolved {
                role: storage::read_cached_role(self.storage),
                reason: FallbackReason::RoleMissing,
            },
            Ok(RoleLookupResponse::Rejected(status)) => {
                tracing::debug!("Role lookup rejected stored credential with status {}", status);

                Resolution::Unauthenticated
            }
            Err(err) => {
                tracing::warn!("Role lookup failed, falling back to cached role: {}", err);

                match storage::read_cached_role(self.storage) {
                    Some(role) => Resolution::FallbackResolved {
                        role: Some(role),
                        reason: FallbackReason::LookupFailed,
                    },
                    None => Resolution::Unauthenticated,
                }
            }
        }
    }
}
