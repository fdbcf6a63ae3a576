use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use service::soda::domain::{QuantityInput, Soda, SodaInput};
use tracing::info;

use crate::{errors::JsonApiError, routes::ServerState};

// `/products/:key` carries a name for GET and a numeric id for DELETE and
// PATCH; the router cannot hold two differently named captures there.

#[utoipa::path(
    post, path = "/products", tag = "sodas",
    request_body = crate::openapi::SodaInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::SodaDoc),
        (status = 400, description = "Invalid Input", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Already Registered", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<SodaInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Soda>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.sodas.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/products/{name}", tag = "sodas",
    params(("name" = String, Path, description = "Exact soda name")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::SodaDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn find_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<Soda>, JsonApiError> {
    Ok(Json(state.sodas.find_by_name(&name).await?))
}

#[utoipa::path(
    get, path = "/products", tag = "sodas",
    responses((status = 200, description = "All sodas, possibly empty", body = [crate::openapi::SodaDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Soda>>, JsonApiError> {
    let all = state.sodas.list_all().await?;
    info!(count = all.len(), "list sodas");
    Ok(Json(all))
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "sodas",
    params(("id" = i64, Path, description = "Soda ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_by_id(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.sodas.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch, path = "/products/{id}/increment", tag = "sodas",
    params(("id" = i64, Path, description = "Soda ID")),
    request_body = crate::openapi::QuantityInputDoc,
    responses(
        (status = 200, description = "Incremented", body = crate::openapi::SodaDoc),
        (status = 400, description = "Invalid Input or Stock Exceeded", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn increment(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<QuantityInput>, JsonRejection>,
) -> Result<Json<Soda>, JsonApiError> {
    let Path(id) = id?;
    let Json(QuantityInput { quantity }) = payload?;
    Ok(Json(state.sodas.increment(id, quantity).await?))
}
