use data_access_objects::{CategoryDao, LocationDao, PostDao, UserDao};
use models::posts;
use sea_orm::*;
use services::{InputValidator, NewPostInput};

use super::PostRepository;
use crate::RepositoryError;

impl PostRepository {
    pub async fn create_post(
        db: &DatabaseConnection,
        input: NewPostInput,
    ) -> Result<posts::Model, RepositoryError> {
        input.validate()?;

        if UserDao::find_by_id(db, input.author_id).await?.is_none() {
            return Err(RepositoryError::field("author", "author does not exist"));
        }
        // validated above
        let category_id = input.category_id.ok_or_else(|| {
            RepositoryError::field("category", "category is required")
        })?;
        if CategoryDao::find_by_id(db, category_id).await?.is_none() {
            return Err(RepositoryError::field("category", "category does not exist"));
        }
        if let Some(location_id) = input.location_id {
            if LocationDao::find_by_id(db, location_id).await?.is_none() {
                return Err(RepositoryError::field("location", "location does not exist"));
            }
        }

        let mut model = posts::ActiveModel {
            title: ActiveValue::set(input.title),
            text: ActiveValue::set(input.text),
            author_id: ActiveValue::set(input.author_id),
            category_id: ActiveValue::set(Some(category_id)),
            location_id: ActiveValue::set(input.location_id),
            ..posts::ActiveModel::new()
        };
        if let Some(pub_date) = input.pub_date {
            model.pub_date = ActiveValue::set(pub_date);
        }
        if let Some(is_published) = input.is_published {
            model.is_published = ActiveValue::set(is_published);
        }

        let post = PostDao::insert(db, model).await?;
        tracing::info!(post_id = post.id, category_id, "post created");
        Ok(post)
    }
}
