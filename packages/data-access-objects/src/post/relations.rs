use models::{categories, locations, posts, users};
use sea_orm::{DatabaseConnection, DbErr};
use serde::Serialize;

use crate::{CategoryDao, LocationDao, UserDao};

/// A post together with the records its page displays.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PostWithRelations {
    pub post: posts::Model,
    pub author: users::Model,
    pub location: Option<locations::Model>,
    pub category: Option<categories::Model>,
}

impl PostWithRelations {
    /// Attaches author, location and category to every post using one query
    /// per relation, whatever the number of posts. Each query binds every
    /// distinct id once.
    ///
    /// A post whose author vanished between the queries is dropped, since the
    /// delete cascades to the post itself.
    pub async fn attach(
        db: &DatabaseConnection,
        posts: Vec<posts::Model>,
    ) -> Result<Vec<Self>, DbErr> {
        let author_ids = posts.iter().map(|p| p.author_id).collect();
        let location_ids = posts.iter().filter_map(|p| p.location_id).collect();
        let category_ids = posts.iter().filter_map(|p| p.category_id).collect();

        let authors = UserDao::find_by_ids(db, author_ids).await?;
        let locations = LocationDao::find_by_ids(db, location_ids).await?;
        let categories = CategoryDao::find_by_ids(db, category_ids).await?;

        Ok(posts
            .into_iter()
            .filter_map(|post| {
                let author = authors.get(&post.author_id)?.clone();
                let location = post.location_id.and_then(|id| locations.get(&id).cloned());
                let category = post.category_id.and_then(|id| categories.get(&id).cloned());
                Some(PostWithRelations {
                    post,
                    author,
                    location,
                    category,
                })
            })
            .collect())
    }

    pub async fn attach_one(
        db: &DatabaseConnection,
        post: posts::Model,
    ) -> Result<Option<Self>, DbErr> {
        Ok(Self::attach(db, vec![post]).await?.pop())
    }
}
