//! Extractors whose rejections render as `JsonApiError` instead of axum's
//! plain-text bodies.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::JsonApiError;

/// JSON request body; malformed or incomplete bodies become 400 `{error}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct JsonBody<T>(pub T);

/// Path parameters; values that fail to parse become 404 `{error}`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(JsonApiError))]
pub struct PathParam<T>(pub T);

/// Query string; values that fail to parse become 400 `{error}`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(JsonApiError))]
pub struct QueryParams<T>(pub T);
