mod genre_id;
mod query;

pub use genre_id::genre_id;
pub use query::QueryParams;
