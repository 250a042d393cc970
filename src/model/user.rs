use serde::{Deserialize, Serialize};

/// Authorization class of the signed in user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Employee,
}

impl UserRole {
    /// Parses the role name used by the role API and the local role cache.
    ///
    /// Returns `None` for empty strings and for any role this client does not know about.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "employee" => Some(Self::Employee),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
        }
    }

    /// Human readable label shown in the navbar role badge
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Employee => "Employee",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
