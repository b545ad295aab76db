use std::collections::{BTreeSet, HashMap};

use models::locations::{ActiveModel, Column, Entity, Model};
use models::prelude::Locations;
use sea_orm::*;

pub struct LocationDao;

impl LocationDao {
    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        model.insert(db).await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
        Locations::find_by_id(id).one(db).await
    }

    pub async fn find_by_ids(
        db: &DatabaseConnection,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, Model>, DbErr> {
        let ids: BTreeSet<i32> = ids.into_iter().collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = Locations::find().filter(Column::Id.is_in(ids)).all(db).await?;
        Ok(rows.into_iter().map(|l| (l.id, l)).collect())
    }

    /// Posts pointing at the location keep existing with `location_id` cleared.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
        Entity::delete_by_id(id).exec(db).await
    }
}
