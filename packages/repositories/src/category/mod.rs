use data_access_objects::CategoryDao;
use models::categories::{self, Model};
use sea_orm::*;
use services::{InputValidator, NewCategoryInput};

use crate::RepositoryError;

pub struct CategoryRepository;

impl CategoryRepository {
    pub async fn create_category(
        db: &DatabaseConnection,
        input: NewCategoryInput,
    ) -> Result<Model, RepositoryError> {
        input.validate()?;

        let mut model = categories::ActiveModel {
            title: ActiveValue::set(input.title),
            description: ActiveValue::set(input.description),
            slug: ActiveValue::set(input.slug),
            ..categories::ActiveModel::new()
        };
        if let Some(is_published) = input.is_published {
            model.is_published = ActiveValue::set(is_published);
        }

        let category = CategoryDao::insert(db, model)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    RepositoryError::field("slug", "slug is already in use")
                }
                _ => RepositoryError::Database(err),
            })?;
        tracing::info!(category_id = category.id, slug = %category.slug, "category created");
        Ok(category)
    }

    /// Hiding a category hides its page and every post filed under it.
    pub async fn set_published(
        db: &DatabaseConnection,
        id: i32,
        is_published: bool,
    ) -> Result<Model, RepositoryError> {
        let existing = CategoryDao::find_by_id(db, id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let mut am = existing.into_active_model();
        am.is_published = ActiveValue::set(is_published);

        let category = CategoryDao::update(db, am).await?;
        tracing::info!(category_id = id, is_published, "category visibility changed");
        Ok(category)
    }

    pub async fn delete_category(db: &DatabaseConnection, id: i32) -> Result<i32, RepositoryError> {
        let res = CategoryDao::delete(db, id).await?;
        if res.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        tracing::info!(category_id = id, "category deleted");
        Ok(id)
    }
}
