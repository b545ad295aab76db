use chrono::NaiveDateTime;
use models::{categories, locations, posts, schema, users};
use sea_orm::*;

use crate::{build_schema, BlogSchema};

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

pub fn create_test_schema(db: DatabaseConnection) -> BlogSchema {
    build_schema(db)
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
    categories::ActiveModel {
        title: ActiveValue::Set(slug.to_uppercase()),
        description: ActiveValue::Set(format!("All about {}", slug)),
        slug: ActiveValue::Set(slug.to_string()),
        is_published: ActiveValue::Set(is_published),
        ..categories::ActiveModel::new()
    }
    .insert(db)
    .await
    .expect("Failed to create test category")
}

pub async fn create_test_post(
    db: &DatabaseConnection,
    author: &users::Model,
    category: &categories::Model,
    title: &str,
    pub_date: NaiveDateTime,
    is_published: bool,
) -> posts::Model {
    posts::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        text: ActiveValue::Set(format!("{} text", title)),
        pub_date: ActiveValue::Set(pub_date),
        author_id: ActiveValue::Set(author.id),
        category_id: ActiveValue::Set(Some(category.id)),
        is_published: ActiveValue::Set(is_published),
        ..posts::ActiveModel::new()
    }
    .insert(db)
    .await
    .expect("Failed to create test post")
}

pub async fn create_test_location(
    db: &DatabaseConnection,
    name: &str,
    is_published: bool,
) -> locations::Model {
    locations::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        is_published: ActiveValue::Set(is_published),
        ..locations::ActiveModel::new()
    }
    .insert(db)
    .await
    .expect("Failed to create test location")
}

pub async fn set_post_location(
    db: &DatabaseConnection,
    post: posts::Model,
    location: &locations::Model,
) -> posts::Model {
    let mut am = post.into_active_model();
    am.location_id = ActiveValue::Set(Some(location.id));
    am.update(db).await.expect("Failed to set post location")
}
