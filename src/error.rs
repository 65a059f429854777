//! Error types for Rolegate

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Email and password required")]
    BadRequest,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Invalid Authorization header format")]
    MalformedHeader,

    #[error("Token signature mismatch")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Unauthorized")]
    Unauthenticated,

    #[error("Forbidden: insufficient role")]
    InsufficientRole,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status this error surfaces as.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::BadRequest => StatusCode::BAD_REQUEST,
            Error::InvalidCredentials
            | Error::MissingHeader
            | Error::MalformedHeader
            | Error::InvalidSignature
            | Error::Expired
            | Error::MalformedToken
            | Error::Unauthenticated => StatusCode::UNAUTHORIZED,
            Error::InsufficientRole => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the client. All token-verification
    /// failures collapse to one string so callers cannot tell them apart.
    fn public_message(&self) -> &'static str {
        match self {
            Error::BadRequest => "Email and password required",
            Error::InvalidCredentials => "Invalid credentials",
            Error::MissingHeader => "Missing Authorization header",
            Error::MalformedHeader => "Invalid Authorization header format",
            Error::InvalidSignature | Error::Expired | Error::MalformedToken => {
                "Invalid or expired token"
            }
            Error::Unauthenticated => "Unauthorized",
            Error::InsufficientRole => "Forbidden: insufficient role",
            _ => "Internal Server Error",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        }
        (status, Json(json!({ "message": self.public_message() }))).into_response()
    }
}
