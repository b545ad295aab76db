pub mod categories;
pub mod locations;
pub mod posts;
pub mod prelude;
pub mod published;
pub mod schema;
pub mod users;

pub use published::{PublishedFlagged, PublishedPosts};

/// Upper bound for titles and names.
pub const TITLE_MAX_LENGTH: usize = 256;
pub const NAME_MAX_LENGTH: usize = 256;
pub const SLUG_MAX_LENGTH: usize = 64;
pub const USERNAME_MAX_LENGTH: usize = 150;

#[cfg(test)]
mod test_helpers;
