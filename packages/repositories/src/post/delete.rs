use data_access_objects::PostDao;
use sea_orm::*;

use super::PostRepository;
use crate::RepositoryError;

impl PostRepository {
    pub async fn delete_post(db: &DatabaseConnection, id: i32) -> Result<i32, RepositoryError> {
        let res = PostDao::delete(db, id).await?;
        if res.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        tracing::info!(post_id = id, "post deleted");
        Ok(id)
    }
}
