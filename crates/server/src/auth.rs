//! Caller identity seam.
//!
//! Requests pass through an [`Authenticator`] once, in middleware. Handlers
//! read the resulting [`CallerCredentials`] from request extensions and never
//! touch the `Authorization` header themselves.

use async_trait::async_trait;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use thiserror::Error;
use tracing::warn;

use crate::{errors::JsonApiError, state::AppState};

/// What the authenticator learned about the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallerCredentials {
    /// Raw `Authorization` header value, forwarded to upstream services as-is.
    pub authorization: Option<String>,
}

#[derive(Debug, Error)]
pub enum AuthRejection {
    #[error("missing credentials")]
    Missing,
    #[error("invalid credentials: {0}")]
    Invalid(String),
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<CallerCredentials, AuthRejection>;
}

/// Accepts every request. Verification happens at the gateway in front of this service.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassThroughAuthenticator;

#[async_trait]
impl Authenticator for PassThroughAuthenticator {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<CallerCredentials, AuthRejection> {
        let authorization = headers
            .get(AUTHORIZATION)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
        Ok(CallerCredentials { authorization })
    }
}

/// Middleware: run the configured authenticator and stash the credentials.
pub async fn capture_credentials(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let creds = state
        .authenticator
        .authenticate(req.headers())
        .await
        .map_err(|e| {
            warn!(path = %req.uri().path(), err = %e, "request rejected by authenticator");
            JsonApiError::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(e.to_string()))
        })?;
    req.extensions_mut().insert(creds);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn pass_through_captures_header_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert("AuThOrIzAtIoN", HeaderValue::from_static("Bearer abc.def"));
        let creds = PassThroughAuthenticator.authenticate(&headers).await.unwrap();
        assert_eq!(creds.authorization.as_deref(), Some("Bearer abc.def"));
    }

    #[tokio::test]
    async fn pass_through_accepts_anonymous_callers() {
        let creds = PassThroughAuthenticator.authenticate(&HeaderMap::new()).await.unwrap();
        assert_eq!(creds, CallerCredentials::default());
    }
}
