use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Unique-constraint violations become `Conflict`; everything else is `Db`.
    pub fn from_db(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Conflict(msg),
            _ => Self::Db(e.to_string()),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Model(ModelError::Validation(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_validation_counts_as_validation() {
        let e: ServiceError = ModelError::Validation("name required".into()).into();
        assert!(e.is_validation());
        assert!(!ServiceError::not_found("movie").is_validation());
    }

    #[test]
    fn plain_db_errors_are_not_conflicts() {
        let e = ServiceError::from_db(DbErr::Custom("boom".into()));
        assert!(matches!(e, ServiceError::Db(_)));
    }
}
