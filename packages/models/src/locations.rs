use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::Serialize;

use crate::PublishedFlagged;

/// Stands in for a location that is missing or not published.
pub const UNDISCLOSED_NAME: &str = "Somewhere on Earth";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(256))")]
    pub name: String,
    /// Display only. Never consulted when deciding whether a post is visible.
    pub is_published: bool,
    pub created_at: DateTime,
}

impl Model {
    /// The name visitors see.
    pub fn display_name(&self) -> &str {
        if self.is_published() {
            &self.name
        } else {
            UNDISCLOSED_NAME
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::posts::Entity")]
    Posts,
}

impl Related<super::posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            is_published: Set(true),
            created_at: Set(chrono::Utc::now().naive_utc()),
            ..ActiveModelTrait::default()
        }
    }
}
