use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::types::MessageResponse;
use models::outlet;
use service::outlet::{parse_outlet_id, OutletInput};
use tracing::info;

use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    post, path = "/outlet/create", tag = "outlet",
    request_body = crate::openapi::OutletInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::OutletDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create_outlet(
    State(state): State<AppState>,
    Json(input): Json<OutletInput>,
) -> Result<(StatusCode, Json<outlet::Model>), JsonApiError> {
    let created = state.outlets.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/outlet/", tag = "outlet",
    responses((status = 200, description = "All outlets", body = [crate::openapi::OutletDoc]))
)]
pub async fn list_outlets(State(state): State<AppState>) -> Result<Json<Vec<outlet::Model>>, JsonApiError> {
    let list = state.outlets.list().await?;
    info!(count = list.len(), "list outlets");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/outlet/{outlet}", tag = "outlet",
    params(("outlet" = i32, Path, description = "Outlet ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::OutletDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc),
        (status = 422, description = "Id is not an integer", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_outlet(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<outlet::Model>, JsonApiError> {
    let id = parse_outlet_id(&raw_id)?;
    Ok(Json(state.outlets.get(id).await?))
}

#[utoipa::path(
    get, path = "/outlet/by-code/{code}", tag = "outlet",
    params(("code" = String, Path, description = "Outlet code")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::OutletDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_outlet_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<outlet::Model>, JsonApiError> {
    Ok(Json(state.outlets.get_by_code(&code).await?))
}

#[utoipa::path(
    put, path = "/outlet/{outlet}", tag = "outlet",
    params(("outlet" = i32, Path, description = "Outlet ID")),
    request_body = crate::openapi::OutletInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::OutletDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update_outlet(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<OutletInput>,
) -> Result<Json<outlet::Model>, JsonApiError> {
    let id = parse_outlet_id(&raw_id)?;
    Ok(Json(state.outlets.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/outlet/{outlet}", tag = "outlet",
    params(("outlet" = i32, Path, description = "Outlet ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageResponseDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc),
        (status = 422, description = "Id is not an integer", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete_outlet(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let id = parse_outlet_id(&raw_id)?;
    let deleted = state.outlets.delete(id).await?;
    Ok(Json(MessageResponse::new(deleted.message())))
}
