//! Bearer-token authentication.
//!
//! Anonymous requests pass through (they hit the lower throttle tier);
//! a presented-but-unknown token is rejected outright.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::AuthConfig;

/// Context attached to authenticated requests.
#[derive(Clone, Debug)]
pub struct ApiContext {
    /// The token the caller authenticated with; throttle bucket key.
    pub token: String,
}

/// Accepted bearer tokens.
pub struct AuthState {
    tokens: HashSet<String>,
}

impl AuthState {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            tokens: config.api_tokens.iter().cloned().collect(),
        }
    }

    fn is_valid(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

pub async fn auth_middleware(
    State(state): State<Arc<AuthState>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let bearer = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match bearer {
        Some(token) if state.is_valid(token) => {
            let ctx = ApiContext {
                token: token.to_string(),
            };
            request.extensions_mut().insert(ctx);
            next.run(request).await
        }
        Some(_) => {
            tracing::warn!("Rejected request with unknown API token");
            (StatusCode::UNAUTHORIZED, "Invalid API token").into_response()
        }
        None => next.run(request).await,
    }
}
