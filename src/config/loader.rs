//! Configuration loading and environment variable interpolation

use crate::error::Result;
use regex::Regex;
use std::env;
use std::fs;
use std::path::Path;

use super::Config;

const CONFIG_FILENAME: &str = "rolegate.toml";

/// Load configuration. A missing rolegate.toml is not an error: the
/// gateway runs on built-in defaults. Environment overrides apply last.
pub fn load_config() -> Result<Config> {
    let mut config = match find_config_file() {
        Some(path) => load_config_from_path(&path)?,
        None => Config::default(),
    };
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Find the configuration file, searching upward from current directory
fn find_config_file() -> Option<std::path::PathBuf> {
    let mut current = env::current_dir().ok()?;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Apply the environment overrides recognized by the gateway:
/// PORT, JWT_SECRET and JWT_EXPIRES_IN.
pub fn apply_env_overrides(config: &mut Config) {
    if let Ok(port) = env::var("PORT") {
        if let Ok(port) = port.parse() {
            config.server.port = port;
        }
    }
    if let Ok(secret) = env::var("JWT_SECRET") {
        config.auth.secret = secret;
    }
    if let Ok(lifetime) = env::var("JWT_EXPIRES_IN") {
        config.auth.token_lifetime = lifetime;
    }
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    // This regex is a compile-time constant, panicking is acceptable here
    // as it indicates a programming error in the codebase, not a runtime issue
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
        .expect("Invalid regex pattern - this is a bug in the codebase");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# Rolegate Configuration

[server]
host = "0.0.0.0"
port = 3000

[auth]
# Shared signing secret; override with JWT_SECRET in production
secret = "${JWT_SECRET:-dev_secret}"
token_lifetime = "1h"

# Demo accounts. Passwords are hashed with bcrypt at startup.
[[users]]
id = 1
email = "admin@example.com"
password = "admin123"
role = "Admin"

[[users]]
id = 2
email = "mod@example.com"
password = "moderator123"
role = "Moderator"

[[users]]
id = 3
email = "user@example.com"
password = "user123"
role = "User"
"#
}
