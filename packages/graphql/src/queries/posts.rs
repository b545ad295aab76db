use async_graphql::{Context, Object, Result};
use repositories::PostRepository;
use sea_orm::DatabaseConnection;

use crate::errors::{internal, not_found_as_none};
use crate::types::{CategoryPosts, Post as PostType};

#[derive(Default)]
pub struct PostQueries;

fn now() -> sea_orm::entity::prelude::DateTime {
    chrono::Utc::now().naive_utc()
}

#[Object]
impl PostQueries {
    /// The latest published posts, newest first, at most five
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostType>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let rows = PostRepository::recent_posts(db, now())
            .await
            .map_err(internal)?;
        Ok(rows.into_iter().map(PostType::from).collect())
    }

    /// A published category with its published posts, or null
    async fn category_posts(
        &self,
        ctx: &Context<'_>,
        slug: String,
    ) -> Result<Option<CategoryPosts>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let page = not_found_as_none(PostRepository::category_posts(db, &slug, now()).await)?;
        Ok(page.map(CategoryPosts::from))
    }

    /// A single published post, or null
    async fn post(&self, ctx: &Context<'_>, id: i32) -> Result<Option<PostType>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let post = not_found_as_none(PostRepository::post_detail(db, id, now()).await)?;
        Ok(post.map(PostType::from))
    }
}
