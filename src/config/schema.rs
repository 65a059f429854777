//! Configuration schema definitions

use crate::auth::models::Role;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    /// Accounts seeded into the credential store at startup
    #[serde(default = "default_users")]
    pub users: Vec<SeedUser>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            users: default_users(),
        }
    }
}

/// Server configuration for the HTTP API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Known-insecure placeholder secret, kept as the fallback for local
/// development. A startup warning fires when it is still in use.
pub const INSECURE_DEFAULT_SECRET: &str = "dev_secret";

/// Token signing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared signing secret
    #[serde(default = "default_secret")]
    pub secret: String,

    /// Token lifetime, e.g. "1h", "30m", "90s" or bare seconds
    #[serde(default = "default_token_lifetime")]
    pub token_lifetime: String,
}

fn default_secret() -> String {
    INSECURE_DEFAULT_SECRET.to_string()
}

fn default_token_lifetime() -> String {
    "1h".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            token_lifetime: default_token_lifetime(),
        }
    }
}

impl AuthConfig {
    /// Parsed token lifetime
    pub fn lifetime(&self) -> Result<chrono::Duration> {
        parse_lifetime(&self.token_lifetime)
    }
}

/// A seed account. The password is plaintext here and hashed at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUser {
    pub id: u64,
    pub email: String,
    pub password: String,
    pub role: Role,
}

fn default_users() -> Vec<SeedUser> {
    vec![
        SeedUser {
            id: 1,
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
            role: Role::Admin,
        },
        SeedUser {
            id: 2,
            email: "mod@example.com".to_string(),
            password: "moderator123".to_string(),
            role: Role::Moderator,
        },
        SeedUser {
            id: 3,
            email: "user@example.com".to_string(),
            password: "user123".to_string(),
            role: Role::User,
        },
    ]
}

/// Parse a duration string: a bare number of seconds, or a number
/// suffixed with `s`, `m`, `h` or `d`.
pub fn parse_lifetime(s: &str) -> Result<chrono::Duration> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::Config("empty token lifetime".to_string()));
    }
    let (value, unit) = match s.char_indices().last() {
        Some((idx, c)) if c.is_ascii_alphabetic() => (&s[..idx], Some(c)),
        _ => (s, None),
    };
    let n: i64 = value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("invalid token lifetime: {}", s)))?;
    match unit {
        None | Some('s') => Ok(chrono::Duration::seconds(n)),
        Some('m') => Ok(chrono::Duration::minutes(n)),
        Some('h') => Ok(chrono::Duration::hours(n)),
        Some('d') => Ok(chrono::Duration::days(n)),
        Some(u) => Err(Error::Config(format!("unknown lifetime unit: {}", u))),
    }
}
