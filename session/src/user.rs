//! Authenticated identity as issued by the backend.
//!
//! The backend is authoritative for every field here; the client only stores
//! and compares them.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Authorization role attached to a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Office administrator; the only role allowed on user management screens.
    #[serde(rename = "ADMIN")]
    Admin,
    /// Regular lawyer account.
    #[serde(rename = "ADVOGADO", alias = "MEMBER")]
    Member,
}

impl Role {
    /// Wire name as sent by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Member => "ADVOGADO",
        }
    }

    /// Human-readable label for tables and selects.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::Member => "Advogado",
        }
    }

    /// Parse a wire name, accepting the `MEMBER` alias.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "ADMIN" => Some(Self::Admin),
            "ADVOGADO" | "MEMBER" => Some(Self::Member),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The logged-in user as returned by `POST auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    /// Display name (`nome` on the wire), when the backend sends one.
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Name to greet the user with, falling back to a generic label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or("Usuário")
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A bearer token paired with the user it was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}
