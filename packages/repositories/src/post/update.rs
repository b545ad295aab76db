use data_access_objects::PostDao;
use models::posts::Model;
use sea_orm::*;

use super::PostRepository;
use crate::RepositoryError;

impl PostRepository {
    pub async fn set_published(
        db: &DatabaseConnection,
        id: i32,
        is_published: bool,
    ) -> Result<Model, RepositoryError> {
        let existing = PostDao::find_by_id(db, id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let mut am = existing.into_active_model();
        am.is_published = ActiveValue::set(is_published);

        let post = PostDao::update(db, am).await?;
        tracing::info!(post_id = id, is_published, "post visibility changed");
        Ok(post)
    }
}
