use crate::model::user::UserRole;

/// Why a session was resolved from the cached role instead of the API's answer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackReason {
    /// The API accepted the credential but its response carried no role
    RoleMissing,
    /// The API could not be reached or answered with a body that is not JSON
    LookupFailed,
}

/// Result of resolving a stored credential against the role API
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The API confirmed the credential and returned a role
    Resolved { role: UserRole },
    /// The user is treated as logged in with whatever role was cached, possibly none
    FallbackResolved {
        role: Option<UserRole>,
        reason: FallbackReason,
    },
    /// The credential was rejected, or could not be checked and no role was cached
    Unauthenticated,
}

impl Resolution {
    pub fn logged_in(&self) -> bool {
        !matches!(self, Self::Unauthenticated)
    }

    pub fn role(&self) -> Option<UserRole> {
        match self {
            Self::Resolved { role } => Some(*role),
            Self::FallbackResolved { role, .. } => *role,
            Self::Unauthenticated => None,
        }
    }
}

/// Events driving [`SessionState`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Neither local storage nor the cookie jar hold a credential
    CredentialMissing,
    /// A credential was found and the role lookup has been issued
    CredentialFound,
    /// The role lookup finished
    Resolved(Resolution),
    /// The user logged out and the stored credential was cleared
    LoggedOut,
}

/// Login state of the current page load.
///
/// A session starts [`Unknown`](SessionState::Unknown) when the navbar mounts and ends in
/// one of the terminal states after a single resolution attempt. `checking` is true only
/// until that happens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unknown,
    NoCredential,
    Resolving,
    Resolved(Resolution),
}

impl SessionState {
    /// Returns the state following `event`, or the current state if `event` does not apply.
    ///
    /// Only one resolution is accepted per session: a resolution that arrives after logout,
    /// or after the session already resolved, leaves the state untouched.
    pub fn next(self, event: SessionEvent) -> Self {
        match (self, event) {
            (_, SessionEvent::LoggedOut) => Self::NoCredential,
            (Self::Unknown, SessionEvent::CredentialMissing) => Self::NoCredential,
            (Self::Unknown, SessionEvent::CredentialFound) => Self::Resolving,
            (Self::Resolving, SessionEvent::Resolved(resolution)) => Self::Resolved(resolution),
            (state, _) => state,
        }
    }

    /// Applies `event` in place.
    ///
    /// # Returns
    /// - `true` - The event changed the state
    /// - `false` - The event did not apply and was ignored
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        let next = self.next(event);
        let changed = next != *self;
        *self = next;
        changed
    }

    pub fn checking(&self) -> bool {
        matches!(self, Self::Unknown | Self::Resolving)
    }

    pub fn logged_in(&self) -> bool {
        match self {
            Self::Resolved(resolution) => resolution.logged_in(),
            _ => false,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        match self {
            Self::Resolved(resolution) => resolution.role(),
            _ => None,
        }
    }
}
