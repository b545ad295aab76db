mod relations;

use models::posts::{ActiveModel, Column, Entity, Model};
use models::prelude::Posts;
use models::PublishedPosts;
use sea_orm::entity::prelude::DateTime;
use sea_orm::*;

pub use relations::PostWithRelations;

pub struct PostDao;

impl PostDao {
    /// Raw lookup, visibility not applied.
    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
        Posts::find_by_id(id).one(db).await
    }

    /// Visible posts, newest first, optionally capped at `limit`.
    pub async fn find_published(
        db: &DatabaseConnection,
        now: DateTime,
        limit: Option<u64>,
    ) -> Result<Vec<Model>, DbErr> {
        let mut query = Posts::find().published(now).latest_first();
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        query.all(db).await
    }

    pub async fn find_published_in_category(
        db: &DatabaseConnection,
        now: DateTime,
        category_id: i32,
    ) -> Result<Vec<Model>, DbErr> {
        Posts::find()
            .published(now)
            .filter(Column::CategoryId.eq(category_id))
            .latest_first()
            .all(db)
            .await
    }

    pub async fn find_published_by_id(
        db: &DatabaseConnection,
        now: DateTime,
        id: i32,
    ) -> Result<Option<Model>, DbErr> {
        Posts::find()
            .published(now)
            .filter(Column::Id.eq(id))
            .one(db)
            .await
    }

    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        model.insert(db).await
    }

    pub async fn update(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        Entity::update(model).exec(db).await
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
        Entity::delete_by_id(id).exec(db).await
    }
}
