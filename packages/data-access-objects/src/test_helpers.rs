use chrono::NaiveDateTime;
use models::{categories, posts, schema, users};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use crate::UserDao;

pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .expect("Failed to open test database");
    schema::create_tables(&db)
        .await
        .expect("Failed to create test schema");
    db
}

pub async fn create_test_user(db: &DatabaseConnection, username: &str) -> users::Model {
    let model = users::ActiveModel {
        username: Set(username.to_string()),
        email: Set(format!("{}@example.com", username)),
        ..users::ActiveModel::new()
    };
    UserDao::insert(db, model)
        .await
        .expect("Failed to create test user")
}

pub async fn create_test_category(
    db: &DatabaseConnection,
    slug: &str,
    is_published: bool,
) -> categories::Model {
    categories::ActiveModel {
        title: Set(slug.to_string()),
        description: Set(String::new()),
        slug: Set(slug.to_string()),
        is_published: Set(is_published),
        ..categories::ActiveModel::new()
    }
    .insert(db)
    .await
    .expect("Failed to create test category")
}

/// Inserts a published post.
pub async fn create_test_post(
    db: &DatabaseConnection,
    author_id: Uuid,
    category_id: Option<i32>,
    title: &str,
    pub_date: NaiveDateTime,
) -> posts::Model {
    posts::ActiveModel {
        title: Set(title.to_string()),
        text: Set("text".to_string()),
        pub_date: Set(pub_date),
        author_id: Set(author_id),
        category_id: Set(category_id),
        ..posts::ActiveModel::new()
    }
    .insert(db)
    .await
    .expect("Failed to create test post")
}
