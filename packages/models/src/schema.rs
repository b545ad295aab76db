// packages/models/src/schema.rs

use sea_orm::*;

use crate::{categories, locations, posts, users};

/// Creates every table that does not exist yet, parents before children so
/// the foreign keys on `posts` resolve.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements = [
        schema.create_table_from_entity(users::Entity).if_not_exists().to_owned(),
        schema.create_table_from_entity(categories::Entity).if_not_exists().to_owned(),
        schema.create_table_from_entity(locations::Entity).if_not_exists().to_owned(),
        schema.create_table_from_entity(posts::Entity).if_not_exists().to_owned(),
    ];

    for statement in statements.iter() {
        db.execute(backend.build(statement)).await?;
    }
    tracing::debug!(tables = statements.len(), "schema ready");
    Ok(())
}
