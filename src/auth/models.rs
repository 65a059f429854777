//! Identity models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Roles a user can hold for authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Administrator - full access
    Admin,
    /// Moderator - moderation tools plus everything a user can do
    Moderator,
    /// Regular user
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Moderator => write!(f, "Moderator"),
            Role::User => write!(f, "User"),
        }
    }
}

/// A credential record held by the store
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user identifier
    pub id: u64,
    /// Email used for login, unique across the store
    pub email: String,
    /// bcrypt hash of the password, produced at startup
    pub password_hash: String,
    /// User's role
    pub role: Role,
}

/// Login credentials. Both fields optional; presence is checked in the
/// login handler so missing fields report as a bad request.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login response with token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Public subset of a user record. Never carries the hash.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: u64,
    pub email: String,
    pub role: Role,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
        }
    }
}
