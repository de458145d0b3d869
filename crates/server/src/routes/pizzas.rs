use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::Value;

use crate::{auth::CallerCredentials, errors::JsonApiError, state::AppState};

/// Proxy to the pizza service for the outlet identified by `code`.
#[utoipa::path(
    get, path = "/outlet/{code}/pizzas", tag = "pizza",
    params(("code" = String, Path, description = "Outlet code")),
    responses(
        (status = 200, description = "Upstream body, unmodified"),
        (status = 404, description = "Outlet unknown", body = crate::openapi::ErrorBodyDoc),
        (status = 503, description = "Pizza service unavailable", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_outlet_pizzas(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Extension(creds): Extension<CallerCredentials>,
) -> Result<Json<Value>, JsonApiError> {
    let body = state
        .pizzas
        .pizzas_for_outlet(&code, creds.authorization.as_deref())
        .await?;
    Ok(Json(body))
}
