use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Movie {
    #[serde(rename = "movieId")]
    pub movie_id: i64,
    pub title: String,
    /// Pipe-delimited genre labels, e.g. `Comedy|Romance`.
    #[serde(default)]
    pub genres: String,
}

impl Movie {
    pub fn genre_labels(&self) -> impl Iterator<Item = &str> {
        self.genres
            .split('|')
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Rating {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "movieId")]
    pub movie_id: i64,
    pub rating: f64,
}

/// Aggregated ratings for one title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieStat {
    pub title: String,
    pub avg_rating: f64,
    pub rating_count: usize,
}

/// Both tables, read once and shared read-only afterwards.
#[derive(Debug)]
pub struct Dataset {
    pub movies: Vec<Movie>,
    pub ratings: Vec<Rating>,
    /// Sorted genre vocabulary, computed at load time.
    pub genres: Vec<String>,
    pub loaded_at: DateTime<Utc>,
}

impl Dataset {
    pub fn new(movies: Vec<Movie>, ratings: Vec<Rating>) -> Self {
        let genres = crate::recommend::unique_genres(&movies);
        Self {
            movies,
            ratings,
            genres,
            loaded_at: Utc::now(),
        }
    }
}
