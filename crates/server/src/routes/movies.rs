use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::IntoParams;
use uuid::Uuid;

use service::errors::ServiceError;
use service::movie::domain::{MovieInput, MoviePage, MovieView};
use service::pagination::Pagination;

use crate::errors::JsonApiError;
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::state::ServerState;

pub const DUPLICATE_NAME: &str = "a movie with the same name already exists";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based, defaults to 1
    pub page: Option<u32>,
    /// defaults to 10, capped at 100
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: MoviePage,
}

#[derive(Debug, Serialize)]
pub struct TitleResponse {
    pub title: &'static str,
}

/// Maps write-path failures: duplicate name is reported with a `title`, bad input
/// as 400, everything else as 404 with the message.
fn write_error(e: ServiceError) -> JsonApiError {
    match e {
        ServiceError::Conflict(_) => JsonApiError::title(StatusCode::INTERNAL_SERVER_ERROR, DUPLICATE_NAME),
        e if e.is_validation() => JsonApiError::error(StatusCode::BAD_REQUEST, e.to_string()),
        e => {
            error!(err = %e, "movie write failed");
            JsonApiError::error(StatusCode::NOT_FOUND, e.to_string())
        }
    }
}

fn read_error(e: ServiceError) -> JsonApiError {
    error!(err = %e, "movie read failed");
    JsonApiError::error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

#[utoipa::path(get, path = "/movies", tag = "movies", params(ListQuery), responses((status = 200, description = "One page of movies", body = crate::openapi::MovieListDoc)))]
pub async fn list(State(state): State<ServerState>, QueryParams(q): QueryParams<ListQuery>) -> Result<Json<ListResponse>, JsonApiError> {
    let page = state.movies.list(Pagination::from_query(q.page, q.limit)).await.map_err(read_error)?;
    Ok(Json(ListResponse { data: page }))
}

#[utoipa::path(get, path = "/movies/{id}", tag = "movies", params(("id" = Uuid, Path, description = "movie id")), responses((status = 200, description = "The movie, or null", body = crate::openapi::MovieDoc)))]
pub async fn get(State(state): State<ServerState>, PathParam(id): PathParam<Uuid>) -> Result<Json<Option<MovieView>>, JsonApiError> {
    state.movies.get(id).await.map(Json).map_err(read_error)
}

#[utoipa::path(get, path = "/movies/by-name/{name}", tag = "movies", params(("name" = String, Path, description = "exact movie name")), responses((status = 200, description = "The movie, or null", body = crate::openapi::MovieDoc)))]
pub async fn get_by_name(State(state): State<ServerState>, PathParam(name): PathParam<String>) -> Result<Json<Option<MovieView>>, JsonApiError> {
    state.movies.get_by_name(&name).await.map(Json).map_err(read_error)
}

#[utoipa::path(post, path = "/movies", tag = "movies", request_body = crate::openapi::MovieInputDoc, responses((status = 201, description = "Created", body = crate::openapi::TitleDoc), (status = 400, description = "Invalid body", body = crate::openapi::ErrorDoc), (status = 500, description = "Duplicate name", body = crate::openapi::TitleDoc), (status = 404, description = "Write failed", body = crate::openapi::ErrorDoc)))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<MovieInput>) -> Result<(StatusCode, Json<TitleResponse>), JsonApiError> {
    let created = state.movies.create(input).await.map_err(write_error)?;
    info!(id = %created.movie.id, name = %created.movie.name, "created movie");
    Ok((StatusCode::CREATED, Json(TitleResponse { title: "movie created" })))
}

#[utoipa::path(put, path = "/movies/{id}", tag = "movies", params(("id" = Uuid, Path, description = "movie id")), request_body = crate::openapi::MovieInputDoc, responses((status = 200, description = "Updated", body = crate::openapi::TitleDoc), (status = 404, description = "Missing or write failed", body = crate::openapi::ErrorDoc), (status = 500, description = "Duplicate name", body = crate::openapi::TitleDoc)))]
pub async fn update(State(state): State<ServerState>, PathParam(id): PathParam<Uuid>, JsonBody(input): JsonBody<MovieInput>) -> Result<Json<TitleResponse>, JsonApiError> {
    let updated = state.movies.update(id, input).await.map_err(write_error)?;
    info!(id = %updated.movie.id, "updated movie");
    Ok(Json(TitleResponse { title: "movie updated" }))
}

#[utoipa::path(delete, path = "/movies/{id}", tag = "movies", params(("id" = Uuid, Path, description = "movie id")), responses((status = 200, description = "Deleted", body = crate::openapi::TitleDoc), (status = 404, description = "Missing or delete failed", body = crate::openapi::ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, PathParam(id): PathParam<Uuid>) -> Result<Json<TitleResponse>, JsonApiError> {
    match state.movies.delete(id).await {
        Ok(()) => {
            info!(id = %id, "deleted movie");
            Ok(Json(TitleResponse { title: "movie deleted" }))
        }
        Err(e @ ServiceError::NotFound(_)) => Err(JsonApiError::error(StatusCode::NOT_FOUND, e.to_string())),
        Err(e) => {
            error!(err = %e, id = %id, "movie delete failed");
            Err(JsonApiError::error(StatusCode::NOT_FOUND, e.to_string()))
        }
    }
}
