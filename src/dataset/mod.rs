pub mod loader;
pub mod model;
pub mod repo;

pub use loader::{load_dataset, load_movies, load_ratings, read_movies, read_ratings, DatasetError};
pub use model::{Dataset, Movie, MovieStat, Rating};
pub use repo::DatasetRepo;
