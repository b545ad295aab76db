pub mod category;
pub mod error;
pub mod location;
pub mod post;

pub use category::CategoryRepository;
pub use data_access_objects::PostWithRelations;
pub use error::RepositoryError;
pub use location::LocationRepository;
pub use post::{CategoryPage, PostRepository, RECENT_POSTS_LIMIT};

#[cfg(test)]
mod test_helpers;
