//! API route handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};
use serde_json::json;

use super::server::SharedState;
use crate::auth::{Claims, LoginRequest, LoginResponse, UserInfo};
use crate::error::{Error, Result};

/// Capability listing for the root path
pub async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "RBAC API running",
        "endpoints": {
            "login": { "method": "POST", "path": "/login", "body": { "email": "string", "password": "string" } },
            "adminDashboard": { "method": "GET", "path": "/admin/dashboard", "auth": "Bearer token", "role": "Admin" },
            "moderatorTools": { "method": "GET", "path": "/moderator/tools", "auth": "Bearer token", "roles": ["Admin", "Moderator"] },
            "userProfile": { "method": "GET", "path": "/user/profile", "auth": "Bearer token", "roles": ["Admin", "Moderator", "User"] },
        }
    }))
}

/// Verify credentials and issue a token.
///
/// Unknown email and wrong password produce identical responses, so a
/// caller cannot probe which accounts exist.
pub async fn login(
    State(state): State<SharedState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(req) = payload.map_err(|_| Error::BadRequest)?;
    let (email, password) = match (req.email, req.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => return Err(Error::BadRequest),
    };

    let user = state.store.lookup(&email).ok_or(Error::InvalidCredentials)?;

    // bcrypt is deliberately slow; keep it off the async workers.
    let hash = user.password_hash.clone();
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(&password, &hash))
        .await
        .map_err(|e| Error::Other(e.to_string()))??;
    if !matches {
        return Err(Error::InvalidCredentials);
    }

    let token = state.issuer.issue(user)?;
    Ok(Json(LoginResponse {
        token,
        user: UserInfo::from(user),
    }))
}

// Protected routes. `require_auth` has already verified the token and
// attached the claims; each handler echoes the payload it was called with.

pub async fn admin_dashboard(Extension(claims): Extension<Claims>) -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to Admin dashboard", "user": claims }))
}

pub async fn moderator_tools(Extension(claims): Extension<Claims>) -> Json<serde_json::Value> {
    Json(json!({ "message": "Moderator tools access granted", "user": claims }))
}

pub async fn user_profile(Extension(claims): Extension<Claims>) -> Json<serde_json::Value> {
    Json(json!({ "message": "User profile", "user": claims }))
}
