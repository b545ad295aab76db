// src/setup.rs

use sea_orm::*;

use crate::config::AppConfig;

pub(super) async fn set_up_db(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(config.database_url.clone());
    opts.sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    let db = Database::connect(opts).await?;
    tracing::info!(backend = ?db.get_database_backend(), "DB connected");

    if config.create_schema {
        models::schema::create_tables(&db).await?;
        tracing::info!("schema created");
    }
    Ok(db)
}
