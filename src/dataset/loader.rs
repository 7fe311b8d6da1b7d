use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use super::model::{Dataset, Movie, Rating};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to open {0}: {1}")]
    Open(String, std::io::Error),
    #[error("Failed to parse {0}: {1}")]
    Parse(String, csv::Error),
    #[error("Dataset load task failed: {0}")]
    Task(String),
}

fn read_records<T, R>(reader: R, source: &str) -> Result<Vec<T>, DatasetError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: T = result.map_err(|e| DatasetError::Parse(source.to_string(), e))?;
        records.push(record);
    }
    Ok(records)
}

fn open(path: &Path) -> Result<File, DatasetError> {
    File::open(path).map_err(|e| DatasetError::Open(path.display().to_string(), e))
}

pub fn read_movies<R: Read>(reader: R, source: &str) -> Result<Vec<Movie>, DatasetError> {
    read_records(reader, source)
}

pub fn read_ratings<R: Read>(reader: R, source: &str) -> Result<Vec<Rating>, DatasetError> {
    read_records(reader, source)
}

pub fn load_movies(path: &Path) -> Result<Vec<Movie>, DatasetError> {
    let movies = read_movies(open(path)?, &path.display().to_string())?;
    info!("Loaded {} movies from {}", movies.len(), path.display());
    Ok(movies)
}

pub fn load_ratings(path: &Path) -> Result<Vec<Rating>, DatasetError> {
    let ratings = read_ratings(open(path)?, &path.display().to_string())?;
    info!("Loaded {} ratings from {}", ratings.len(), path.display());
    Ok(ratings)
}

/// Reads both files. Blocking; call from a blocking context.
pub fn load_dataset(movies_path: &Path, ratings_path: &Path) -> Result<Dataset, DatasetError> {
    let movies = load_movies(movies_path)?;
    let ratings = load_ratings(ratings_path)?;
    let dataset = Dataset::new(movies, ratings);
    info!("Dataset ready with {} genres", dataset.genres.len());
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_movies() {
        let data = "movieId,title,genres\n\
                    1,Toy Story (1995),Adventure|Animation|Children\n\
                    11,\"American President, The (1995)\",Comedy|Drama|Romance\n";
        let movies = read_movies(data.as_bytes(), "movies.csv").unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].movie_id, 1);
        assert_eq!(movies[1].title, "American President, The (1995)");
        assert_eq!(movies[1].genres, "Comedy|Drama|Romance");
    }

    #[test]
    fn test_read_ratings_ignores_extra_columns() {
        let data = "userId,movieId,rating,timestamp\n1,1,4.0,964982703\n1,3,3.5,964981247\n";
        let ratings = read_ratings(data.as_bytes(), "ratings.csv").unwrap();
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[1].movie_id, 3);
        assert_eq!(ratings[1].rating, 3.5);
    }

    #[test]
    fn test_malformed_row() {
        let data = "userId,movieId,rating\n1,abc,4.0\n";
        let err = read_ratings(data.as_bytes(), "ratings.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(ref src, _) if src == "ratings.csv"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_movies(Path::new("/nonexistent/movies.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Open(_, _)));
    }
}
