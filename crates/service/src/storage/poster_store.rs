use std::path::{Component, Path, PathBuf};

use tracing::{info, warn};

/// Local directory holding poster images, plus the public URL they are served under.
#[derive(Clone, Debug)]
pub struct PosterStore {
    static_dir: PathBuf,
    public_base_url: String,
}

impl PosterStore {
    pub fn new(static_dir: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self { static_dir: static_dir.into(), public_base_url: public_base_url.into() }
    }

    pub fn from_config(cfg: &configs::StorageConfig) -> Self {
        Self::new(cfg.static_dir.clone(), cfg.public_base_url.clone())
    }

    pub fn static_dir(&self) -> &Path { &self.static_dir }

    /// Map a stored poster path onto the static directory.
    ///
    /// Leading separators are ignored. Returns `None` for empty values and for
    /// anything that would step outside the directory (`..`, drive prefixes).
    pub fn resolve(&self, poster: &str) -> Option<PathBuf> {
        let trimmed = poster.trim().trim_start_matches(|c| c == '/' || c == '\\');
        if trimmed.is_empty() {
            return None;
        }
        let rel = Path::new(trimmed);
        let contained = rel
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        contained.then(|| self.static_dir.join(rel))
    }

    /// Public URL for a stored poster path.
    pub fn public_url(&self, poster: &str) -> String {
        let base = self.public_base_url.trim_end_matches('/');
        let rel = poster.trim().trim_start_matches('/');
        format!("{}/{}", base, rel)
    }

    /// Best-effort delete. Failures are logged and never bubble up; returns
    /// whether a file was actually removed.
    pub async fn remove(&self, poster: &str) -> bool {
        let Some(path) = self.resolve(poster) else {
            warn!(poster, "poster path rejected, nothing deleted");
            return false;
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                info!(path = %path.display(), "poster_deleted");
                true
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "poster delete failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &Path) -> PosterStore {
        PosterStore::new(dir, "http://127.0.0.1:4001/static/")
    }

    #[test]
    fn resolve_stays_inside_static_dir() {
        let s = store(Path::new("/srv/uploads"));
        assert_eq!(s.resolve("a.jpg"), Some(PathBuf::from("/srv/uploads/a.jpg")));
        assert_eq!(s.resolve("/posters/a.jpg"), Some(PathBuf::from("/srv/uploads/posters/a.jpg")));
        assert_eq!(s.resolve("../etc/passwd"), None);
        assert_eq!(s.resolve("posters/../../x"), None);
        assert_eq!(s.resolve("   "), None);
    }

    #[test]
    fn public_url_joins_with_single_slash() {
        let s = store(Path::new("/srv/uploads"));
        assert_eq!(s.public_url("/a.jpg"), "http://127.0.0.1:4001/static/a.jpg");
        assert_eq!(s.public_url("b/c.png"), "http://127.0.0.1:4001/static/b/c.png");
    }

    #[tokio::test]
    async fn remove_deletes_existing_file_and_tolerates_missing() {
        let dir = tempfile::tempdir().unwrap();
        let s = store(dir.path());
        let file = dir.path().join("p.jpg");
        tokio::fs::write(&file, b"img").await.unwrap();

        assert!(s.remove("p.jpg").await);
        assert!(!file.exists());
        assert!(!s.remove("p.jpg").await);
        assert!(!s.remove("../outside.jpg").await);
    }
}
