pub mod post;

pub use post::{Author, Category, CategoryPosts, Location, Post};
