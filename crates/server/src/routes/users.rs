use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::IntoParams;

use models::user;
use service::errors::ServiceError;
use service::user::domain::{CreateUserInput, UpdateUserInput};

use crate::errors::JsonApiError;
use crate::extract::{JsonBody, QueryParams};
use crate::state::ServerState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// exact email match
    pub email: Option<String>,
}

fn api_error(e: ServiceError) -> JsonApiError {
    match e {
        ServiceError::Conflict(_) => JsonApiError::error(StatusCode::CONFLICT, "a user with the same email already exists"),
        ServiceError::NotFound(_) => JsonApiError::error(StatusCode::NOT_FOUND, e.to_string()),
        e if e.is_validation() => JsonApiError::error(StatusCode::BAD_REQUEST, e.to_string()),
        e => {
            error!(err = %e, "user operation failed");
            JsonApiError::error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[utoipa::path(post, path = "/users", tag = "users", request_body = crate::openapi::CreateUserDoc, responses((status = 201, description = "Created", body = crate::openapi::UserDoc), (status = 400, description = "Invalid body", body = crate::openapi::ErrorDoc), (status = 409, description = "Duplicate email", body = crate::openapi::ErrorDoc)))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<CreateUserInput>) -> Result<(StatusCode, Json<user::Model>), JsonApiError> {
    let created = state.users.create(input).await.map_err(api_error)?;
    info!(id = %created.id, "created user");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/users", tag = "users", params(UserQuery), responses((status = 200, description = "Users", body = [crate::openapi::UserDoc])))]
pub async fn list(State(state): State<ServerState>, QueryParams(q): QueryParams<UserQuery>) -> Result<Json<Vec<user::Model>>, JsonApiError> {
    let users = match q.email.as_deref() {
        Some(email) => state.users.find_by_email(email).await.map(|u| u.into_iter().collect::<Vec<_>>()),
        None => state.users.list().await,
    };
    users.map(Json).map_err(api_error)
}

#[utoipa::path(put, path = "/users", tag = "users", request_body = crate::openapi::UpdateUserDoc, responses((status = 200, description = "Updated", body = crate::openapi::UserDoc), (status = 400, description = "Invalid body", body = crate::openapi::ErrorDoc), (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc), (status = 409, description = "Duplicate email", body = crate::openapi::ErrorDoc)))]
pub async fn update(State(state): State<ServerState>, JsonBody(input): JsonBody<UpdateUserInput>) -> Result<Json<user::Model>, JsonApiError> {
    let updated = state.users.update(input).await.map_err(api_error)?;
    info!(id = %updated.id, "updated user");
    Ok(Json(updated))
}
