pub mod category;
pub mod location;
pub mod post;
pub mod user;

pub use category::CategoryDao;
pub use location::LocationDao;
pub use post::{PostDao, PostWithRelations};
pub use user::UserDao;

#[cfg(test)]
mod test_helpers;
