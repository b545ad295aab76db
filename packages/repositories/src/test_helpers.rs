use chrono::NaiveDateTime;
use models::{categories, posts, schema, users};
use sea_orm::*;
use services::{NewCategoryInput, NewLocationInput, NewPostInput};

use crate::{CategoryRepository, PostRepository};

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

pub fn location_input(name: &str, is_published: bool) -> NewLocationInput {
    NewLocationInput {
        name: name.to_string(),
        is_published: Some(is_published),
    }
}

pub fn post_input(
    author: &users::Model,
    category: &categories::Model,
    title: &str,
    pub_date: NaiveDateTime,
) -> NewPostInput {
    NewPostInput {
        title: title.to_string(),
        text: format!("{} text", title),
        author_id: author.id,
        category_id: Some(category.id),
        location_id: None,
        pub_date: Some(pub_date),
        is_published: Some(true),
    }
}

/// Published post, no location.
pub async fn create_test_post(
    db: &DatabaseConnection,
    author: &users::Model,
    category: &categories::Model,
    title: &str,
    pub_date: NaiveDateTime,
) -> posts::Model {
    PostRepository::create_post(db, post_input(author, category, title, pub_date))
        .await
        .expect("Failed to create test post")
}
