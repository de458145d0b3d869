use std::time::Duration;

use async_trait::async_trait;
use common::{
    metrics::{PIZZA_UPSTREAM_DURATION, PIZZA_UPSTREAM_REQUESTS_TOTAL},
    upstream::fetch_json,
    CoreError,
};
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_PIZZA_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of the pizzas offered at an outlet.
#[async_trait]
pub trait PizzaCatalog: Send + Sync {
    /// `authorization` is forwarded verbatim; the returned JSON is not reshaped.
    async fn pizzas_for_outlet(&self, code: &str, authorization: Option<&str>) -> Result<Value, CoreError>;
}

/// Pizza service reached over HTTP at `<base>/pizza/for-outlet/<code>`.
#[derive(Clone)]
pub struct HttpPizzaCatalog {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpPizzaCatalog {
    pub fn new(base_url: &str) -> Result<Self, CoreError> {
        Self::with_timeout(base_url, DEFAULT_PIZZA_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, CoreError> {
        let base_url = Url::parse(base_url).map_err(|e| CoreError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CoreError::InvalidUrl(base_url.to_string()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Path segments are appended (and percent-encoded) after the base path.
    pub fn url_for(&self, code: &str) -> Result<Url, CoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CoreError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["pizza", "for-outlet", code]);
        Ok(url)
    }
}

#[async_trait]
impl PizzaCatalog for HttpPizzaCatalog {
    async fn pizzas_for_outlet(&self, code: &str, authorization: Option<&str>) -> Result<Value, CoreError> {
        let url = self.url_for(code)?;
        debug!(%url, forwarded_auth = authorization.is_some(), "calling pizza service");

        let timer = PIZZA_UPSTREAM_DURATION.start_timer();
        let res = fetch_json(&self.client, url, authorization).await;
        timer.observe_duration();

        let outcome = match &res {
            Ok(_) => "ok",
            Err(e) => e.outcome(),
        };
        PIZZA_UPSTREAM_REQUESTS_TOTAL.with_label_values(&[outcome]).inc();
        res
    }
}
