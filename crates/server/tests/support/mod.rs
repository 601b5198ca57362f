#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use configs::{DatabaseConfig, StorageConfig};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const BASE_URL: &str = "http://127.0.0.1:4001/static";

/// Router on a migrated SQLite file plus an empty poster directory. Both temp
/// dirs are dropped with the struct.
pub struct TestApp {
    pub router: Router,
    pub static_dir: TempDir,
    _db_dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let db_dir = tempfile::tempdir().expect("db dir");
    let static_dir = tempfile::tempdir().expect("static dir");
    let database = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", db_dir.path().join("server.db").display()),
        max_connections: 1,
        min_connections: 1,
        idle_timeout_secs: 0,
        max_lifetime_secs: 0,
        run_migrations: true,
        ..Default::default()
    };
    let storage = StorageConfig {
        static_dir: static_dir.path().display().to_string(),
        public_base_url: BASE_URL.into(),
    };
    let state = server::startup::build_state(&database, &storage).await.expect("state");
    TestApp { router: server::startup::build_app(state), static_dir, _db_dir: db_dir }
}

impl TestApp {
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(v) => builder.header(CONTENT_TYPE, "application/json").body(Body::from(v.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");
        let res = self.router.clone().oneshot(req).await.expect("response");
        let status = res.status();
        let bytes = res.into_body().collect().await.expect("body").to_bytes();
        let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) { self.send(Method::GET, uri, None).await }

    pub async fn write_poster(&self, name: &str) -> std::path::PathBuf {
        let path = self.static_dir.path().join(name);
        tokio::fs::write(&path, b"poster-bytes").await.expect("write poster");
        path
    }

    /// Create through the API and return the stored id. The id is looked up in
    /// the listing so names never have to be encoded into a path.
    pub async fn create_movie(&self, body: Value) -> String {
        let name = body["name"].as_str().expect("name").to_string();
        let (status, _) = self.send(Method::POST, "/movies", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        let (_, page) = self.get("/movies?limit=100").await;
        page["data"]["movies"]
            .as_array()
            .expect("movies")
            .iter()
            .find(|m| m["name"] == name.as_str())
            .and_then(|m| m["id"].as_str())
            .expect("created movie listed")
            .to_string()
    }
}
