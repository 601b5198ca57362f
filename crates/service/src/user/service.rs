use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use models::user;

use super::domain::{normalize_email, validate_fields, CreateUserInput, UpdateUserInput};
use super::password::hash_password;
use super::repository::UserRepository;
use crate::errors::ServiceError;

/// User business service independent of web framework
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a user; the password is stored only as an argon2 hash.
    ///
    /// # Examples
    /// ```
    /// use service::user::{service::UserService, repository::mock::MockUserRepository, domain::CreateUserInput};
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MockUserRepository::default()));
    /// let input = CreateUserInput { name: "Ana".into(), email: "Ana@Example.com".into(), password: "Secret123".into() };
    /// let user = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(user.email, "ana@example.com");
    /// assert_ne!(user.password_hash, "Secret123");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CreateUserInput) -> Result<user::Model, ServiceError> {
        validate_fields(&input.name, &input.email, Some(&input.password))?;
        let hash = hash_password(&input.password)?;
        let created = self
            .repo
            .save(input.name.trim(), &normalize_email(&input.email), hash)
            .await?;
        info!(user_id = %created.id, "user_created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<user::Model>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError> {
        self.repo.find_by_email(&normalize_email(email)).await
    }

    #[instrument(skip(self, input), fields(user_id = %input.id, email = %input.email))]
    pub async fn update(&self, input: UpdateUserInput) -> Result<user::Model, ServiceError> {
        validate_fields(&input.name, &input.email, input.password.as_deref())?;
        let mut current = self
            .repo
            .find_by_id(input.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("user"))?;

        current.name = input.name.trim().to_string();
        current.email = normalize_email(&input.email);
        if let Some(p) = input.password.as_deref() {
            current.password_hash = hash_password(p)?;
        }
        current.updated_at = Utc::now().into();

        let saved = self.repo.update(current).await?;
        info!(user_id = %saved.id, "user_updated");
        Ok(saved)
    }
}
