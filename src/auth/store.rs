//! In-memory credential store

use crate::auth::models::User;
use crate::config::SeedUser;
use crate::error::Result;
use std::collections::HashMap;

/// bcrypt cost factor applied to seed passwords at startup.
pub const HASH_COST: u32 = 10;

/// Read-only credential store, populated once at process start.
/// No write operations are exposed.
pub struct CredentialStore {
    users: HashMap<String, User>,
}

impl CredentialStore {
    /// Hash each seed password and index the records by email.
    pub fn from_seeds(seeds: &[SeedUser]) -> Result<Self> {
        let mut users = HashMap::with_capacity(seeds.len());
        for seed in seeds {
            let password_hash = bcrypt::hash(&seed.password, HASH_COST)?;
            users.insert(
                seed.email.clone(),
                User {
                    id: seed.id,
                    email: seed.email.clone(),
                    password_hash,
                    role: seed.role,
                },
            );
        }
        Ok(Self { users })
    }

    /// Look up a record by email. Exact, case-sensitive match.
    pub fn lookup(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
