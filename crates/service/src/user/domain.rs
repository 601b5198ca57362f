use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::user;

use crate::errors::ServiceError;

pub const PASSWORD_MIN_LEN: usize = 8;

/// Registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Update input; the id travels in the body. Omitting `password` keeps the
/// stored hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserInput {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

pub fn normalize_email(email: &str) -> String { email.trim().to_lowercase() }

pub(crate) fn validate_fields(name: &str, email: &str, password: Option<&str>) -> Result<(), ServiceError> {
    user::validate_name(name)?;
    user::validate_email(email)?;
    if let Some(p) = password {
        if p.chars().count() < PASSWORD_MIN_LEN {
            return Err(ServiceError::Validation(format!("password too short (>={PASSWORD_MIN_LEN})")));
        }
    }
    Ok(())
}
