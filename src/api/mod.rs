//! HTTP API server and route handlers

pub mod routes;
pub mod server;

pub use server::{router, run_server, AppState, SharedState};
