use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dataset::MovieStat;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreInfo {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub genre: String,
    pub items: Vec<MovieStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetStatus {
    pub movies: usize,
    pub ratings: usize,
    pub genres: usize,
    #[serde(rename = "loadedAt")]
    pub loaded_at: DateTime<Utc>,
}
