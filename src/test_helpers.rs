use chrono::NaiveDateTime;
use models::{categories, posts, schema, users};
use repositories::{CategoryRepository, PostRepository};
use sea_orm::*;
use services::{NewCategoryInput, NewPostInput};

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

pub fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

pub async fn create_test_user(db: &DatabaseConnection, username: &str) -> users::Model {
    users::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        email: ActiveValue::Set(format!("{}@example.com", username)),
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
    let input = NewCategoryInput {
        title: format!("Category {}", slug),
        description: "About this category".to_string(),
        slug: slug.to_string(),
        is_published: Some(is_published),
    };
    CategoryRepository::create_category(db, input)
        .await
        .expect("Failed to create test category")
}

pub async fn create_test_post(
    db: &DatabaseConnection,
    author: &users::Model,
    category: &categories::Model,
    title: &str,
    pub_date: NaiveDateTime,
) -> posts::Model {
    let input = NewPostInput {
        title: title.to_string(),
        text: "text".to_string(),
        author_id: author.id,
        category_id: Some(category.id),
        location_id: None,
        pub_date: Some(pub_date),
        is_published: Some(true),
    };
    PostRepository::create_post(db, input)
        .await
        .expect("Failed to create test post")
}
