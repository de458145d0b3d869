//! Prometheus metrics on the default registry.

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter_vec, Encoder, Histogram, IntCounterVec, TextEncoder,
};

/// Outbound calls to the pizza service, labelled by `outcome`
/// (`ok`, `network`, `timeout`, `status`, `parse`, `invalid_url`).
pub static PIZZA_UPSTREAM_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "outlet_pizza_upstream_requests_total",
        "Total calls made to the pizza service",
        &["outcome"]
    )
    .expect("register pizza_upstream_requests_total")
});

pub static PIZZA_UPSTREAM_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "outlet_pizza_upstream_duration_seconds",
        "Pizza service call duration in seconds",
        vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register pizza_upstream_duration")
});

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
