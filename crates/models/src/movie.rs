use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movie")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub synopsis: Option<String>,
    pub trailer: Option<String>,
    pub release_date: Option<Date>,
    pub box_office: Option<f64>,
    /// Path relative to the static directory.
    pub poster: Option<String>,
    pub gender: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const NAME_MAX_LEN: usize = 255;

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ModelError::Validation(format!("name longer than {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_trailer(url: &str) -> Result<(), ModelError> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ModelError::Validation("trailer must start with http(s)".into()));
    }
    Ok(())
}

pub fn validate_box_office(amount: f64) -> Result<(), ModelError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ModelError::Validation("boxOffice must be a non-negative number".into()));
    }
    Ok(())
}
