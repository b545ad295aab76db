use std::collections::{BTreeSet, HashMap};

use models::categories::{ActiveModel, Column, Entity, Model};
use models::prelude::Categories;
use sea_orm::*;

pub struct CategoryDao;

impl CategoryDao {
    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        model.insert(db).await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
        Categories::find_by_id(id).one(db).await
    }

    /// Looks a category up by slug. An unpublished category is reported as
    /// absent.
    pub async fn find_published_by_slug(
        db: &DatabaseConnection,
        slug: &str,
    ) -> Result<Option<Model>, DbErr> {
        Categories::find()
            .filter(Column::Slug.eq(slug))
            .filter(Column::IsPublished.eq(true))
            .one(db)
            .await
    }

    /// Repeated ids are bound once.
    pub async fn find_by_ids(
        db: &DatabaseConnection,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, Model>, DbErr> {
        let ids: BTreeSet<i32> = ids.into_iter().collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = Categories::find().filter(Column::Id.is_in(ids)).all(db).await?;
        Ok(rows.into_iter().map(|c| (c.id, c)).collect())
    }

    pub async fn update(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        Entity::update(model).exec(db).await
    }

    /// Posts in the category survive with `category_id` cleared.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
        Entity::delete_by_id(id).exec(db).await
    }
}
