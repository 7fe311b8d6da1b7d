use std::path::PathBuf;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::loader::{load_dataset, DatasetError};
use super::model::Dataset;

/// Lazily loaded, memoized movie and rating tables.
///
/// The first `get()` reads both files; later calls return the same
/// `Arc<Dataset>` until `reload()` swaps in a fresh copy.
pub struct DatasetRepo {
    movies_path: PathBuf,
    ratings_path: PathBuf,
    current: ArcSwapOption<Dataset>,
    load_lock: Mutex<()>,
}

impl DatasetRepo {
    pub fn new(movies_path: impl Into<PathBuf>, ratings_path: impl Into<PathBuf>) -> Self {
        Self {
            movies_path: movies_path.into(),
            ratings_path: ratings_path.into(),
            current: ArcSwapOption::empty(),
            load_lock: Mutex::new(()),
        }
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        let repo = Self::new(PathBuf::new(), PathBuf::new());
        repo.current.store(Some(Arc::new(dataset)));
        repo
    }

    pub fn is_loaded(&self) -> bool {
        self.current.load().is_some()
    }

    pub async fn get(&self) -> Result<Arc<Dataset>, DatasetError> {
        if let Some(dataset) = self.current.load_full() {
            return Ok(dataset);
        }

        let _guard = self.load_lock.lock().await;
        // Another caller may have finished loading while we waited.
        if let Some(dataset) = self.current.load_full() {
            return Ok(dataset);
        }

        let dataset = self.load().await?;
        self.current.store(Some(dataset.clone()));
        Ok(dataset)
    }

    pub async fn reload(&self) -> Result<Arc<Dataset>, DatasetError> {
        let _guard = self.load_lock.lock().await;
        let dataset = self.load().await?;
        self.current.store(Some(dataset.clone()));
        info!(
            "Reloaded dataset: {} movies, {} ratings",
            dataset.movies.len(),
            dataset.ratings.len()
        );
        Ok(dataset)
    }

    async fn load(&self) -> Result<Arc<Dataset>, DatasetError> {
        let movies_path = self.movies_path.clone();
        let ratings_path = self.ratings_path.clone();

        let dataset = tokio::task::spawn_blocking(move || load_dataset(&movies_path, &ratings_path))
            .await
            .map_err(|e| DatasetError::Task(e.to_string()))??;

        Ok(Arc::new(dataset))
    }

    /// Returns `None` without spawning when `interval_secs` is 0.
    pub fn start_background_reload(self: Arc<Self>, interval_secs: u64) -> Option<JoinHandle<()>> {
        if interval_secs == 0 {
            return None;
        }
        let handle = tokio::spawn(async move {
            let period = tokio::time::Duration::from_secs(interval_secs);
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                interval.tick().await;
                info!("Starting background dataset reload");
                if let Err(e) = self.reload().await {
                    error!("Background reload failed: {}", e);
                }
            }
        });
        Some(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Movie, Rating};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("genre-recommender-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_from_dataset_is_memoized() {
        let dataset = Dataset::new(
            vec![Movie {
                movie_id: 1,
                title: "Heat (1995)".to_string(),
                genres: "Action|Crime|Thriller".to_string(),
            }],
            vec![Rating {
                user_id: 1,
                movie_id: 1,
                rating: 4.0,
            }],
        );
        let repo = DatasetRepo::from_dataset(dataset);
        assert!(repo.is_loaded());

        let a = repo.get().await.unwrap();
        let b = repo.get().await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.genres, vec!["Action", "Crime", "Thriller"]);
    }

    #[tokio::test]
    async fn test_get_missing_files() {
        let repo = DatasetRepo::new("/nonexistent/movies.csv", "/nonexistent/ratings.csv");
        assert!(repo.get().await.is_err());
        assert!(!repo.is_loaded());
    }

    #[tokio::test]
    async fn test_load_and_reload() {
        let movies = temp_path("reload-movies.csv");
        let ratings = temp_path("reload-ratings.csv");
        std::fs::write(&movies, "movieId,title,genres\n1,Heat (1995),Action|Crime\n").unwrap();
        std::fs::write(&ratings, "userId,movieId,rating\n1,1,4.0\n").unwrap();

        let repo = DatasetRepo::new(&movies, &ratings);
        let first = repo.get().await.unwrap();
        assert_eq!(first.ratings.len(), 1);

        std::fs::write(&ratings, "userId,movieId,rating\n1,1,4.0\n2,1,3.0\n").unwrap();
        let second = repo.reload().await.unwrap();
        assert_eq!(second.ratings.len(), 2);
        assert!(Arc::ptr_eq(&second, &repo.get().await.unwrap()));

        // A failed reload keeps serving the previous tables.
        std::fs::remove_file(&ratings).unwrap();
        assert!(repo.reload().await.is_err());
        assert_eq!(repo.get().await.unwrap().ratings.len(), 2);

        let _ = std::fs::remove_file(&movies);
    }

    #[tokio::test]
    async fn test_background_reload_picks_up_changes() {
        let movies = temp_path("bg-movies.csv");
        let ratings = temp_path("bg-ratings.csv");
        std::fs::write(&movies, "movieId,title,genres\n1,Heat (1995),Action|Crime\n").unwrap();
        std::fs::write(&ratings, "userId,movieId,rating\n1,1,4.0\n").unwrap();

        let repo = Arc::new(DatasetRepo::new(&movies, &ratings));
        assert_eq!(repo.get().await.unwrap().ratings.len(), 1);

        std::fs::write(&ratings, "userId,movieId,rating\n1,1,4.0\n2,1,3.0\n").unwrap();
        let handle = repo.clone().start_background_reload(1).unwrap();

        let mut reloaded = false;
        for _ in 0..50 {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            if repo.get().await.unwrap().ratings.len() == 2 {
                reloaded = true;
                break;
            }
        }
        handle.abort();
        assert!(reloaded);

        let _ = std::fs::remove_file(&movies);
        let _ = std::fs::remove_file(&ratings);
    }

    #[tokio::test]
    async fn test_background_reload_disabled() {
        let repo = Arc::new(DatasetRepo::new("/nonexistent/movies.csv", "/nonexistent/ratings.csv"));
        assert!(repo.start_background_reload(0).is_none());
    }
}
