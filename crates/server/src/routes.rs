pub mod outlets;
pub mod pizzas;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::{metrics::encode_metrics, types::Health};

use crate::{auth, openapi::ApiDoc, state::AppState};

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics() -> (StatusCode, String) {
    encode_metrics()
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: operational routes plus the outlet resource.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // Operational routes (no credential capture)
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    // Outlet resource and pizza proxy
    let outlet_routes = Router::new()
        .route("/outlet/create", post(outlets::create_outlet))
        .route("/outlet/", get(outlets::list_outlets))
        .route("/outlet", get(outlets::list_outlets))
        .route("/outlet/by-code/:code", get(outlets::get_outlet_by_code))
        .route(
            "/outlet/:outlet",
            get(outlets::get_outlet)
                .put(outlets::update_outlet)
                .delete(outlets::delete_outlet),
        )
        .route("/outlet/:outlet/pizzas", get(pizzas::get_outlet_pizzas))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::capture_credentials,
        ));

    public
        .merge(outlet_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
