use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use models::movie;

use super::domain::{clean, MovieInput, MoviePage, MovieView};
use super::repository::MovieRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::storage::PosterStore;

/// Movie business service independent of web framework
pub struct MovieService<R: MovieRepository> {
    repo: Arc<R>,
    posters: PosterStore,
}

impl<R: MovieRepository> MovieService<R> {
    pub fn new(repo: Arc<R>, posters: PosterStore) -> Self { Self { repo, posters } }

    pub fn posters(&self) -> &PosterStore { &self.posters }

    fn view(&self, movie: movie::Model) -> MovieView {
        let full_path = movie.poster.as_deref().map(|p| self.posters.public_url(p));
        MovieView { movie, full_path }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, page: Pagination) -> Result<MoviePage, ServiceError> {
        let rows = self.repo.find_paginated(page).await?;
        let tot_items = self.repo.count().await?;
        debug!(returned = rows.len(), tot_items, "movies listed");
        Ok(MoviePage { movies: rows.into_iter().map(|m| self.view(m)).collect(), tot_items })
    }

    /// `Ok(None)` when no movie has this id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Option<MovieView>, ServiceError> {
        Ok(self.repo.find_by_id(id).await?.map(|m| self.view(m)))
    }

    #[instrument(skip(self))]
    pub async fn get_by_name(&self, name: &str) -> Result<Option<MovieView>, ServiceError> {
        Ok(self.repo.find_by_name(name).await?.map(|m| self.view(m)))
    }

    /// Create a movie. A duplicate name surfaces as `ServiceError::Conflict`
    /// from the storage constraint, there is no read-before-write.
    ///
    /// # Examples
    /// ```
    /// use service::movie::{service::MovieService, repository::mock::MockMovieRepository, domain::MovieInput};
    /// use service::storage::PosterStore;
    /// use std::sync::Arc;
    /// let svc = MovieService::new(Arc::new(MockMovieRepository::default()), PosterStore::new("/tmp", "http://localhost/static"));
    /// let input = MovieInput { name: "Tropa de Elite".into(), poster: Some("tropa.jpg".into()), ..Default::default() };
    /// let movie = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(movie.full_path.as_deref(), Some("http://localhost/static/tropa.jpg"));
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: MovieInput) -> Result<MovieView, ServiceError> {
        input.validate()?;
        let created = self.repo.save(&input).await?;
        info!(movie_id = %created.id, "movie_created");
        Ok(self.view(created))
    }

    /// Replace the editable fields of a movie. An omitted or blank poster keeps
    /// the current one; a different poster removes the old file once the row
    /// is saved.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn update(&self, id: Uuid, input: MovieInput) -> Result<MovieView, ServiceError> {
        input.validate()?;
        let mut current = self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("movie"))?;

        let replaced = match input.poster() {
            Some(new) if current.poster.as_deref() != Some(new) => current.poster.replace(new.to_string()),
            _ => None,
        };
        current.name = input.name.trim().to_string();
        current.synopsis = clean(&input.synopsis);
        current.trailer = clean(&input.trailer);
        current.release_date = input.release_date;
        current.box_office = input.box_office;
        current.gender = clean(&input.gender);
        current.updated_at = Utc::now().into();

        let saved = self.repo.update(current).await?;
        if let Some(old) = replaced {
            self.posters.remove(&old).await;
        }
        info!(movie_id = %saved.id, "movie_updated");
        Ok(self.view(saved))
    }

    /// Delete the row, then its poster file.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let current = self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("movie"))?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("movie"));
        }
        if let Some(poster) = current.poster.as_deref() {
            self.posters.remove(poster).await;
        }
        info!(movie_id = %id, "movie_deleted");
        Ok(())
    }
}
