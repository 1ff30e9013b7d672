//! Authorization middleware
//!
//! Establishes the caller's `userId` claim from a bearer token. Session
//! lifecycle (issuing, revoking, account state) lives in the account service.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    constants::BEARER_PREFIX,
    error::{AppError, AppResult},
    state::AppState,
};

/// Claims attached to an authorized request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id. Checked for UUID v4 format by the handlers that use it.
    #[serde(rename = "userId")]
    pub user_id: String,
    pub exp: i64,
}

impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Verify a token signature and expiry, returning its claims
pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Authorization middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let Some(auth_header) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        debug!(path = %path, "Auth failed: No Authorization header");
        return Err(AppError::Unauthorized);
    };

    let Some(token) = auth_header.strip_prefix(BEARER_PREFIX) else {
        debug!(path = %path, "Auth failed: expected 'Bearer <token>'");
        return Err(AppError::Unauthorized);
    };

    let claims = verify_token(token, &state.config().jwt.secret).inspect_err(|e| {
        debug!(path = %path, error = %e, "Auth failed: Token verification failed");
    })?;

    debug!(path = %path, user_id = %claims.user_id, "Request authorized");

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
