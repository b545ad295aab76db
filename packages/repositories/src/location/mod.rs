use data_access_objects::LocationDao;
use models::locations::{self, Model};
use sea_orm::*;
use services::{InputValidator, NewLocationInput};

use crate::RepositoryError;

pub struct LocationRepository;

impl LocationRepository {
    pub async fn create_location(
        db: &DatabaseConnection,
        input: NewLocationInput,
    ) -> Result<Model, RepositoryError> {
        input.validate()?;

        let mut model = locations::ActiveModel {
            name: ActiveValue::set(input.name),
            ..locations::ActiveModel::new()
        };
        if let Some(is_published) = input.is_published {
            model.is_published = ActiveValue::set(is_published);
        }

        let location = LocationDao::insert(db, model).await?;
        tracing::info!(location_id = location.id, "location created");
        Ok(location)
    }

    pub async fn delete_location(db: &DatabaseConnection, id: i32) -> Result<i32, RepositoryError> {
        let res = LocationDao::delete(db, id).await?;
        if res.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        tracing::info!(location_id = id, "location deleted");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::LocationRepository;
    use crate::test_helpers::*;
    use crate::RepositoryError;

    #[tokio::test]
    async fn test_create_location() {
        let db = setup_test_db().await;

        let location = LocationRepository::create_location(&db, location_input("Zermatt", false))
            .await
            .unwrap();

        assert_eq!(location.name, "Zermatt");
        assert!(!location.is_published);
    }

    #[tokio::test]
    async fn test_create_location_empty_name() {
        let db = setup_test_db().await;

        let result = LocationRepository::create_location(&db, location_input("", true)).await;
        assert!(matches!(result, Err(RepositoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_location() {
        let db = setup_test_db().await;

        let result = LocationRepository::delete_location(&db, 9).await;
        assert!(result.unwrap_err().is_not_found());
    }
}
