use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::movie::{MovieService, SeaOrmMovieRepository};
use service::storage::PosterStore;
use service::user::{SeaOrmUserRepository, UserService};

/// Shared handler state. The connection pool is created once at startup and
/// handed to every repository from here.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub movies: Arc<MovieService<SeaOrmMovieRepository>>,
    pub users: Arc<UserService<SeaOrmUserRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, posters: PosterStore) -> Self {
        let movies = MovieService::new(Arc::new(SeaOrmMovieRepository::new(db.clone())), posters);
        let users = UserService::new(Arc::new(SeaOrmUserRepository::new(db.clone())));
        Self { db, movies: Arc::new(movies), users: Arc::new(users) }
    }
}
