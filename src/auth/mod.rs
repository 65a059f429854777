//! Authentication and authorization

pub mod jwt;
pub mod middleware;
pub mod models;
pub mod store;

pub use jwt::{Claims, TokenIssuer};
pub use middleware::{extract_bearer_token, require_auth};
pub use models::{LoginRequest, LoginResponse, Role, User, UserInfo};
pub use store::CredentialStore;
