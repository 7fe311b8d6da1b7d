use std::collections::{BTreeSet, HashMap};

use crate::dataset::{Dataset, Movie, MovieStat};

pub const DEFAULT_MIN_RATINGS: usize = 10;
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendOptions {
    /// Titles with fewer ratings than this are never recommended.
    pub min_ratings: usize,
    pub limit: usize,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            min_ratings: DEFAULT_MIN_RATINGS,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Every distinct genre label, sorted.
pub fn unique_genres(movies: &[Movie]) -> Vec<String> {
    let genres: BTreeSet<&str> = movies.iter().flat_map(|m| m.genre_labels()).collect();
    genres.into_iter().map(str::to_string).collect()
}

/// Highest-rated titles whose genre list contains `genre`, case-insensitively.
///
/// Ratings are grouped by title, so distinct movie ids sharing a title are
/// aggregated together. Ties on the average are broken by title.
pub fn recommend_movies(genre: &str, dataset: &Dataset, opts: &RecommendOptions) -> Vec<MovieStat> {
    if genre.trim().is_empty() {
        return Vec::new();
    }
    let needle = genre.to_lowercase();

    // One entry per matching movie row, so a repeated movie id joins its
    // ratings once per row.
    let mut matching: HashMap<i64, Vec<&str>> = HashMap::new();
    for movie in dataset
        .movies
        .iter()
        .filter(|m| m.genres.to_lowercase().contains(&needle))
    {
        matching.entry(movie.movie_id).or_default().push(movie.title.as_str());
    }

    if matching.is_empty() {
        return Vec::new();
    }

    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    for rating in &dataset.ratings {
        let Some(titles) = matching.get(&rating.movie_id) else {
            continue;
        };
        for title in titles {
            let entry = totals.entry(*title).or_insert((0.0, 0));
            entry.0 += rating.rating;
            entry.1 += 1;
        }
    }

    let mut stats: Vec<MovieStat> = totals
        .into_iter()
        .filter(|(_, (_, count))| *count >= opts.min_ratings)
        .map(|(title, (sum, count))| MovieStat {
            title: title.to_string(),
            avg_rating: sum / count as f64,
            rating_count: count,
        })
        .collect();

    stats.sort_by(|a, b| {
        b.avg_rating
            .total_cmp(&a.avg_rating)
            .then_with(|| a.title.cmp(&b.title))
    });
    stats.truncate(opts.limit);
    stats
}
