//! Access gate middleware: authentication, then role allow-listing

use crate::api::server::SharedState;
use crate::auth::jwt::Claims;
use crate::auth::models::Role;
use crate::error::{Error, Result};
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

/// Pull the bearer token out of the `Authorization` header.
/// The header must be exactly `Bearer <token>`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str> {
    let header = headers.get(AUTHORIZATION).ok_or(Error::MissingHeader)?;
    let header = header.to_str().map_err(|_| Error::MalformedHeader)?;
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(Error::MalformedHeader),
    }
}

/// Authentication stage. Verifies the bearer token and attaches the decoded
/// claims to the request for the authorization stage and handlers.
pub async fn require_auth(
    State(state): State<SharedState>,
    mut req: Request,
    next: Next,
) -> std::result::Result<Response, Error> {
    let token = extract_bearer_token(req.headers())?;
    let claims = state.issuer.verify(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Authorization stage. Runs after `require_auth`; rejects unless the
/// authenticated role is in the allowed set.
async fn require_role(
    req: Request,
    next: Next,
    allowed: &'static [Role],
) -> std::result::Result<Response, Error> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .ok_or(Error::Unauthenticated)?;
    if !allowed.contains(&claims.role) {
        return Err(Error::InsufficientRole);
    }
    Ok(next.run(req).await)
}

pub async fn require_admin(req: Request, next: Next) -> std::result::Result<Response, Error> {
    require_role(req, next, &[Role::Admin]).await
}

pub async fn require_moderator(req: Request, next: Next) -> std::result::Result<Response, Error> {
    require_role(req, next, &[Role::Admin, Role::Moderator]).await
}

pub async fn require_user(req: Request, next: Next) -> std::result::Result<Response, Error> {
    require_role(req, next, &[Role::Admin, Role::Moderator, Role::User]).await
}
