use chrono::NaiveDateTime;
use sea_orm::*;

use crate::{categories, locations, posts, schema, users};

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
    users::ActiveModel {
        username: Set(username.to_string()),
        email: Set(format!("{}@example.com", username)),
        ..users::ActiveModel::new()
    }
    .insert(db)
    .await
    .expect("Failed to create test user")
}

pub async fn create_test_category(
    db: &DatabaseConnection,
    slug: &str,
    is_published: bool,
) -> categories::Model {
    categories::ActiveModel {
        title: Set(format!("Category {}", slug)),
        description: Set("description".to_string()),
        slug: Set(slug.to_string()),
        is_published: Set(is_published),
        ..categories::ActiveModel::new()
    }
    .insert(db)
    .await
    .expect("Failed to create test category")
}

pub async fn create_test_location(
    db: &DatabaseConnection,
    name: &str,
    is_published: bool,
) -> locations::Model {
    locations::ActiveModel {
        name: Set(name.to_string()),
        is_published: Set(is_published),
        ..locations::ActiveModel::new()
    }
    .insert(db)
    .await
    .expect("Failed to create test location")
}

pub async fn create_test_post(
    db: &DatabaseConnection,
    author: &users::Model,
    category: Option<&categories::Model>,
    title: &str,
    pub_date: NaiveDateTime,
    is_published: bool,
) -> posts::Model {
    posts::ActiveModel {
        title: Set(title.to_string()),
        text: Set("text".to_string()),
        pub_date: Set(pub_date),
        author_id: Set(author.id),
        category_id: Set(category.map(|c| c.id)),
        is_published: Set(is_published),
        ..posts::ActiveModel::new()
    }
    .insert(db)
    .await
    .expect("Failed to create test post")
}
