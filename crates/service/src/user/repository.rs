use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use models::user;

use crate::errors::ServiceError;

/// Repository abstraction for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<user::Model>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<user::Model>, ServiceError>;
    async fn save(&self, name: &str, email: &str, password_hash: String) -> Result<user::Model, ServiceError>;
    async fn update(&self, user: user::Model) -> Result<user::Model, ServiceError>;
}

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<user::Model>, ServiceError> {
        user::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::from_db)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    async fn find_all(&self) -> Result<Vec<user::Model>, ServiceError> {
        user::Entity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    async fn save(&self, name: &str, email: &str, password_hash: String) -> Result<user::Model, ServiceError> {
        let now = Utc::now();
        let am = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        am.insert(&self.db).await.map_err(ServiceError::from_db)
    }

    async fn update(&self, u: user::Model) -> Result<user::Model, ServiceError> {
        let am = user::ActiveModel {
            id: Set(u.id),
            name: Set(u.name),
            email: Set(u.email),
            password_hash: Set(u.password_hash),
            created_at: Set(u.created_at),
            updated_at: Set(u.updated_at),
        };
        am.update(&self.db).await.map_err(ServiceError::from_db)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<HashMap<Uuid, user::Model>>,
    }

    fn email_taken(map: &HashMap<Uuid, user::Model>, email: &str, except: Option<Uuid>) -> bool {
        map.values().any(|u| u.email == email && Some(u.id) != except)
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<user::Model>, ServiceError> {
            Ok(self.users.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError> {
            Ok(self.users.lock().unwrap().values().find(|u| u.email == email).cloned())
        }

        async fn find_all(&self) -> Result<Vec<user::Model>, ServiceError> {
            let mut all: Vec<_> = self.users.lock().unwrap().values().cloned().collect();
            all.sort_by_key(|u| u.created_at);
            Ok(all)
        }

        async fn save(&self, name: &str, email: &str, password_hash: String) -> Result<user::Model, ServiceError> {
            let mut map = self.users.lock().unwrap();
            if email_taken(&map, email, None) {
                return Err(ServiceError::Conflict("user.email".into()));
            }
            let now = Utc::now().into();
            let u = user::Model {
                id: Uuid::new_v4(),
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                created_at: now,
                updated_at: now,
            };
            map.insert(u.id, u.clone());
            Ok(u)
        }

        async fn update(&self, u: user::Model) -> Result<user::Model, ServiceError> {
            let mut map = self.users.lock().unwrap();
            if !map.contains_key(&u.id) {
                return Err(ServiceError::not_found("user"));
            }
            if email_taken(&map, &u.email, Some(u.id)) {
                return Err(ServiceError::Conflict("user.email".into()));
            }
            map.insert(u.id, u.clone());
            Ok(u)
        }
    }
}
