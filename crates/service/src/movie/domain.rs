use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use models::movie;

use crate::errors::ServiceError;

/// Request body for create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    pub name: String,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub trailer: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub box_office: Option<f64>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl MovieInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        movie::validate_name(&self.name)?;
        if let Some(t) = self.trailer.as_deref().filter(|t| !t.trim().is_empty()) {
            movie::validate_trailer(t.trim())?;
        }
        if let Some(b) = self.box_office {
            movie::validate_box_office(b)?;
        }
        Ok(())
    }

    /// Poster value worth storing; blank strings count as absent.
    pub fn poster(&self) -> Option<&str> {
        self.poster.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }
}

/// Movie as returned to clients. `full_path` is computed per response and
/// never written back.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieView {
    #[serde(flatten)]
    pub movie: movie::Model,
    pub full_path: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePage {
    pub movies: Vec<MovieView>,
    pub tot_items: u64,
}

/// Trim optional text, mapping blanks to `None`.
pub(crate) fn clean(v: &Option<String>) -> Option<String> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_body() {
        let input: MovieInput = serde_json::from_value(serde_json::json!({
            "name": "Bacurau",
            "releaseDate": "2019-08-29",
            "boxOffice": 1200000.5,
            "poster": "bacurau.jpg"
        }))
        .unwrap();
        assert_eq!(input.release_date, NaiveDate::from_ymd_opt(2019, 8, 29));
        assert_eq!(input.box_office, Some(1_200_000.5));
        assert!(input.synopsis.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let mut input = MovieInput { name: " ".into(), ..Default::default() };
        assert!(input.validate().unwrap_err().is_validation());
        input.name = "Ok".into();
        input.trailer = Some("not-a-url".into());
        assert!(input.validate().is_err());
        input.trailer = Some("".into());
        input.box_office = Some(-3.0);
        assert!(input.validate().is_err());
    }

    #[test]
    fn blank_poster_is_absent() {
        let input = MovieInput { name: "x".into(), poster: Some("  ".into()), ..Default::default() };
        assert_eq!(input.poster(), None);
    }
}
