use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use constant_time_eq::constant_time_eq;
use serde_json::json;
use thiserror::Error;

use crate::AppState;

/// Why a request was rejected before reaching the handler.
///
/// Display strings are generic on purpose: the expected key must never
/// appear in a response body, and neither the key nor the presented
/// token is logged anywhere.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// MASTER_API_KEY was never set; an operator problem, not a client one.
    #[error("server is missing MASTER_API_KEY configuration")]
    Misconfigured,
    /// No Authorization header, or one that isn't `Bearer <token>`.
    #[error("Not authenticated")]
    MissingCredentials,
    /// A bearer token was presented but it doesn't match the master key.
    #[error("Invalid or expired token")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({"detail": self.to_string()}));
        match self {
            // no WWW-Authenticate here: retrying with credentials won't help
            AuthError::Misconfigured => {
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            AuthError::MissingCredentials | AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                body,
            )
                .into_response(),
        }
    }
}

/// Verifies `Authorization: Bearer <token>` headers against the master
/// key configured at startup.
#[derive(Clone)]
pub struct Authenticator {
    master_key: Option<String>,
}

impl Authenticator {
    pub fn new(master_key: Option<String>) -> Self {
        Self { master_key }
    }

    pub fn is_configured(&self) -> bool {
        self.master_key.is_some()
    }

    /// Decide whether a request may proceed, given the raw Authorization
    /// header value (None if the header was missing or not valid UTF-8).
    pub fn authenticate(&self, header: Option<&str>) -> Result<(), AuthError> {
        // checked lazily so the server can boot without a key and the
        // operator sees 500s instead of a refused process
        let Some(master_key) = self.master_key.as_deref() else {
            return Err(AuthError::Misconfigured);
        };

        let token = header
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingCredentials)?;

        if constant_time_eq(token.as_bytes(), master_key.as_bytes()) {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}

/// Axum middleware guarding the protected routes. Failures are turned
/// into responses here and never reach the handler body.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let decision = state.authenticator.authenticate(header);

    match decision {
        Ok(()) => next.run(request).await,
        Err(err) => err.into_response(),
    }
}
