//! Outbound JSON GET used when this service calls another one.

use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::CoreError;

impl CoreError {
    /// Short label used for metrics and log fields.
    pub fn outcome(&self) -> &'static str {
        match self {
            CoreError::Network(_) => "network",
            CoreError::Timeout(_) => "timeout",
            CoreError::Status { .. } => "status",
            CoreError::Parse(_) => "parse",
            CoreError::InvalidUrl(_) => "invalid_url",
        }
    }

    fn from_reqwest(url: &reqwest::Url, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CoreError::Timeout(url.to_string())
        } else {
            CoreError::Network(e.to_string())
        }
    }
}

/// GET `url`, forwarding `authorization` verbatim when present, and decode the
/// body as JSON. Any non-2xx status is an error; the body is not reshaped.
pub async fn fetch_json(
    client: &reqwest::Client,
    url: reqwest::Url,
    authorization: Option<&str>,
) -> Result<Value, CoreError> {
    let mut req = client.get(url.clone());
    if let Some(auth) = authorization {
        req = req.header(AUTHORIZATION, auth);
    }
    let resp = req
        .send()
        .await
        .map_err(|e| CoreError::from_reqwest(&url, e))?;

    let status = resp.status();
    if !status.is_success() {
        let message = status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string();
        return Err(CoreError::Status { status: status.as_u16(), message });
    }

    resp.json::<Value>().await.map_err(|e| {
        if e.is_timeout() {
            CoreError::Timeout(url.to_string())
        } else {
            CoreError::Parse(e.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, routing::get, Json, Router};
    use std::time::Duration;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn forwards_authorization_and_returns_body() {
        let router = Router::new().route(
            "/echo",
            get(|headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(serde_json::json!({ "auth": auth }))
            }),
        );
        let base = spawn(router).await;
        let url = reqwest::Url::parse(&format!("{base}/echo")).unwrap();

        let body = fetch_json(&reqwest::Client::new(), url, Some("Bearer abc"))
            .await
            .unwrap();
        assert_eq!(body["auth"], "Bearer abc");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let router = Router::new().route("/boom", get(|| async { StatusCode::BAD_GATEWAY }));
        let base = spawn(router).await;
        let url = reqwest::Url::parse(&format!("{base}/boom")).unwrap();

        let err = fetch_json(&reqwest::Client::new(), url, None).await.unwrap_err();
        assert!(matches!(err, CoreError::Status { status: 502, .. }));
        assert_eq!(err.outcome(), "status");
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let router = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(serde_json::json!([]))
            }),
        );
        let base = spawn(router).await;
        let url = reqwest::Url::parse(&format!("{base}/slow")).unwrap();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();

        let err = fetch_json(&client, url, None).await.unwrap_err();
        assert!(matches!(err, CoreError::Timeout(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn non_json_body_is_a_parse_error() {
        let router = Router::new().route("/text", get(|| async { "not json" }));
        let base = spawn(router).await;
        let url = reqwest::Url::parse(&format!("{base}/text")).unwrap();

        let err = fetch_json(&reqwest::Client::new(), url, None).await.unwrap_err();
        assert_eq!(err.outcome(), "parse");
    }
}
