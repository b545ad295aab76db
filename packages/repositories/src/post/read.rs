use data_access_objects::{CategoryDao, PostDao, PostWithRelations};
use sea_orm::entity::prelude::DateTime;
use sea_orm::*;

use super::{CategoryPage, PostRepository, RECENT_POSTS_LIMIT};
use crate::RepositoryError;

impl PostRepository {
    /// Front page: the latest visible posts, at most [`RECENT_POSTS_LIMIT`].
    pub async fn recent_posts(
        db: &DatabaseConnection,
        now: DateTime,
    ) -> Result<Vec<PostWithRelations>, RepositoryError> {
        let posts = PostDao::find_published(db, now, Some(RECENT_POSTS_LIMIT)).await?;
        Ok(PostWithRelations::attach(db, posts).await?)
    }

    /// An unknown slug and an unpublished category both yield `NotFound`.
    pub async fn category_posts(
        db: &DatabaseConnection,
        slug: &str,
        now: DateTime,
    ) -> Result<CategoryPage, RepositoryError> {
        let category = CategoryDao::find_published_by_slug(db, slug)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let posts = PostDao::find_published_in_category(db, now, category.id).await?;
        let posts = PostWithRelations::attach(db, posts).await?;

        Ok(CategoryPage { category, posts })
    }

    pub async fn post_detail(
        db: &DatabaseConnection,
        post_id: i32,
        now: DateTime,
    ) -> Result<PostWithRelations, RepositoryError> {
        let post = PostDao::find_published_by_id(db, now, post_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        PostWithRelations::attach_one(db, post)
            .await?
            .ok_or(RepositoryError::NotFound)
    }
}
