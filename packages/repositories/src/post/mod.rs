mod create;
mod delete;
mod read;
mod update;

use data_access_objects::PostWithRelations;
use models::categories;
use serde::Serialize;

/// Size of the front page listing.
pub const RECENT_POSTS_LIMIT: u64 = 5;

/// A published category and its visible posts, newest first.
#[derive(Clone, Debug, Serialize)]
pub struct CategoryPage {
    pub category: categories::Model,
    pub posts: Vec<PostWithRelations>,
}

pub struct PostRepository;
