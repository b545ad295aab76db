pub mod types;
pub mod queries;
pub mod errors;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use sea_orm::DatabaseConnection;

/// Read-only schema over the published content.
pub type BlogSchema = Schema<queries::Queries, EmptyMutation, EmptySubscription>;

pub fn build_schema(db: DatabaseConnection) -> BlogSchema {
    Schema::build(queries::Queries::default(), EmptyMutation, EmptySubscription)
        .data(db)
        .finish()
}

#[cfg(test)]
pub mod test_helpers;
