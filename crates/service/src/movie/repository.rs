use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use models::movie;

use super::domain::{clean, MovieInput};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Persistence operations the movie service relies on.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<movie::Model>, ServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<movie::Model>, ServiceError>;
    /// One page ordered by name.
    async fn find_paginated(&self, page: Pagination) -> Result<Vec<movie::Model>, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
    async fn save(&self, input: &MovieInput) -> Result<movie::Model, ServiceError>;
    async fn update(&self, movie: movie::Model) -> Result<movie::Model, ServiceError>;
    /// `true` when a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

pub struct SeaOrmMovieRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmMovieRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl MovieRepository for SeaOrmMovieRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<movie::Model>, ServiceError> {
        movie::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::from_db)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<movie::Model>, ServiceError> {
        movie::Entity::find()
            .filter(movie::Column::Name.eq(name.trim()))
            .one(&self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    async fn find_paginated(&self, page: Pagination) -> Result<Vec<movie::Model>, ServiceError> {
        let (page_idx, per_page) = page.normalize();
        movie::Entity::find()
            .order_by_asc(movie::Column::Name)
            .paginate(&self.db, per_page)
            .fetch_page(page_idx)
            .await
            .map_err(ServiceError::from_db)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        movie::Entity::find().count(&self.db).await.map_err(ServiceError::from_db)
    }

    async fn save(&self, input: &MovieInput) -> Result<movie::Model, ServiceError> {
        let now = Utc::now();
        let am = movie::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name.trim().to_string()),
            synopsis: Set(clean(&input.synopsis)),
            trailer: Set(clean(&input.trailer)),
            release_date: Set(input.release_date),
            box_office: Set(input.box_office),
            poster: Set(input.poster().map(str::to_string)),
            gender: Set(clean(&input.gender)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        am.insert(&self.db).await.map_err(ServiceError::from_db)
    }

    async fn update(&self, m: movie::Model) -> Result<movie::Model, ServiceError> {
        let am = movie::ActiveModel {
            id: Set(m.id),
            name: Set(m.name),
            synopsis: Set(m.synopsis),
            trailer: Set(m.trailer),
            release_date: Set(m.release_date),
            box_office: Set(m.box_office),
            poster: Set(m.poster),
            gender: Set(m.gender),
            created_at: Set(m.created_at),
            updated_at: Set(m.updated_at),
        };
        am.update(&self.db).await.map_err(ServiceError::from_db)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::from_db)?;
        Ok(res.rows_affected > 0)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockMovieRepository {
        movies: Mutex<HashMap<Uuid, movie::Model>>,
    }

    impl MockMovieRepository {
        fn name_taken(map: &HashMap<Uuid, movie::Model>, name: &str, except: Option<Uuid>) -> bool {
            map.values().any(|m| m.name == name && Some(m.id) != except)
        }
    }

    #[async_trait]
    impl MovieRepository for MockMovieRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<movie::Model>, ServiceError> {
            Ok(self.movies.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<movie::Model>, ServiceError> {
            Ok(self.movies.lock().unwrap().values().find(|m| m.name == name.trim()).cloned())
        }

        async fn find_paginated(&self, page: Pagination) -> Result<Vec<movie::Model>, ServiceError> {
            let (page_idx, per_page) = page.normalize();
            let mut all: Vec<_> = self.movies.lock().unwrap().values().cloned().collect();
            all.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(all.into_iter().skip((page_idx * per_page) as usize).take(per_page as usize).collect())
        }

        async fn count(&self) -> Result<u64, ServiceError> {
            Ok(self.movies.lock().unwrap().len() as u64)
        }

        async fn save(&self, input: &MovieInput) -> Result<movie::Model, ServiceError> {
            let mut map = self.movies.lock().unwrap();
            let name = input.name.trim().to_string();
            if Self::name_taken(&map, &name, None) {
                return Err(ServiceError::Conflict("movie.name".into()));
            }
            let now = Utc::now().into();
            let m = movie::Model {
                id: Uuid::new_v4(),
                name,
                synopsis: clean(&input.synopsis),
                trailer: clean(&input.trailer),
                release_date: input.release_date,
                box_office: input.box_office,
                poster: input.poster().map(str::to_string),
                gender: clean(&input.gender),
                created_at: now,
                updated_at: now,
            };
            map.insert(m.id, m.clone());
            Ok(m)
        }

        async fn update(&self, m: movie::Model) -> Result<movie::Model, ServiceError> {
            let mut map = self.movies.lock().unwrap();
            if !map.contains_key(&m.id) {
                return Err(ServiceError::not_found("movie"));
            }
            if Self::name_taken(&map, &m.name, Some(m.id)) {
                return Err(ServiceError::Conflict("movie.name".into()));
            }
            map.insert(m.id, m.clone());
            Ok(m)
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            Ok(self.movies.lock().unwrap().remove(&id).is_some())
        }
    }
}
