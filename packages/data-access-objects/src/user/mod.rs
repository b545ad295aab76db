use std::collections::{BTreeSet, HashMap};

use models::prelude::Users;
use models::users::{ActiveModel, Column, Entity, Model};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct UserDao;

impl UserDao {
    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        model.insert(db).await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, DbErr> {
        Users::find_by_id(id).one(db).await
    }

    /// Loads every user in `ids` with a single query, keyed by id.
    ///
    /// A page of posts by one author binds that author once.
    pub async fn find_by_ids(
        db: &DatabaseConnection,
        ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Model>, DbErr> {
        let ids: BTreeSet<Uuid> = ids.into_iter().collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = Users::find().filter(Column::Id.is_in(ids)).all(db).await?;
        Ok(rows.into_iter().map(|u| (u.id, u)).collect())
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
        Entity::delete_by_id(id).exec(db).await
    }
}
