use chrono::NaiveDateTime;
use models::TITLE_MAX_LENGTH;
use serde::Deserialize;
use uuid::Uuid;

use crate::validation::field_validators::FieldValidator;
use crate::validation::input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};

/// Everything needed to write a post.
///
/// `category_id` is an `Option` only so a missing choice can be reported as a
/// field error. Storage keeps the column nullable for categories that get
/// deleted later, but a new post always names one.
#[derive(Clone, Debug, Deserialize)]
pub struct NewPostInput {
    pub title: String,
    pub text: String,
    pub author_id: Uuid,
    pub category_id: Option<i32>,
    pub location_id: Option<i32>,
    /// Defaults to the creation time. Future values schedule the post.
    pub pub_date: Option<NaiveDateTime>,
    pub is_published: Option<bool>,
}

impl InputValidator for NewPostInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(&self.title, "title", &mut errors);
        FieldValidator::validate_max_length(&self.title, TITLE_MAX_LENGTH, "title", &mut errors);
        FieldValidator::validate_required_string(&self.text, "text", &mut errors);
        FieldValidator::validate_required(&self.category_id, "category", &mut errors);

        errors.into_result()
    }
}
