//! HTTP API server

use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::auth::middleware;
use crate::auth::{CredentialStore, TokenIssuer};
use crate::config::{Config, INSECURE_DEFAULT_SECRET};
use crate::error::Result;

use super::routes;

/// Application state shared across handlers. Everything here is read-only
/// after startup, so a plain `Arc` is enough.
pub struct AppState {
    pub config: Config,
    pub store: CredentialStore,
    pub issuer: TokenIssuer,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Build the credential store and token issuer from configuration.
    pub fn from_config(config: Config) -> Result<SharedState> {
        if config.auth.secret == INSECURE_DEFAULT_SECRET {
            tracing::warn!("using the insecure default signing secret; set JWT_SECRET");
        }
        let store = CredentialStore::from_seeds(&config.users)?;
        let issuer = TokenIssuer::new(&config.auth.secret, config.auth.lifetime()?);
        Ok(Arc::new(AppState {
            config,
            store,
            issuer,
        }))
    }
}

/// Run the HTTP API server
pub async fn run_server(config: Config, host: &str, port: u16) -> Result<()> {
    let state = AppState::from_config(config)?;
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
pub fn router(state: SharedState) -> Router {
    // Protected routes: authentication applies to the whole group, the
    // role check is a per-route layer that runs after it.
    let protected = Router::new()
        .route(
            "/admin/dashboard",
            get(routes::admin_dashboard).layer(from_fn(middleware::require_admin)),
        )
        .route(
            "/moderator/tools",
            get(routes::moderator_tools).layer(from_fn(middleware::require_moderator)),
        )
        .route(
            "/user/profile",
            get(routes::user_profile).layer(from_fn(middleware::require_user)),
        )
        .layer(from_fn_with_state(state.clone(), middleware::require_auth));

    Router::new()
        .route("/", get(routes::index))
        .route("/login", post(routes::login))
        .merge(protected)
        // Static assets, if a public directory is present
        .fallback_service(ServeDir::new("public"))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
