use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod movies;
pub mod users;

/// Liveness plus a database ping.
#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse), (status = 503, description = "Database unreachable", body = crate::openapi::HealthResponse)))]
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health::ok())),
        Err(e) => {
            warn!(error = %e, "database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health::degraded()))
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: movie and user CRUD, health, API document
/// and poster files.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let posters = ServeDir::new(state.movies.posters().static_dir());

    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest_service("/static", posters);

    let movie_routes = Router::new()
        .route("/movies", get(movies::list).post(movies::create))
        .route("/movies/by-name/:name", get(movies::get_by_name))
        .route("/movies/:id", get(movies::get).put(movies::update).delete(movies::delete));

    let user_routes = Router::new()
        .route("/users", get(users::list).post(users::create).put(users::update));

    public
        .merge(movie_routes)
        .merge(user_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
