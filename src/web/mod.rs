pub mod handlers;
pub mod page;
pub mod types;

pub use handlers::*;
pub use types::*;
