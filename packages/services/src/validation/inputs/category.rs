use models::{SLUG_MAX_LENGTH, TITLE_MAX_LENGTH};
use serde::Deserialize;

use crate::validation::field_validators::FieldValidator;
use crate::validation::input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};

#[derive(Clone, Debug, Deserialize)]
pub struct NewCategoryInput {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub is_published: Option<bool>,
}

impl InputValidator for NewCategoryInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(&self.title, "title", &mut errors);
        FieldValidator::validate_max_length(&self.title, TITLE_MAX_LENGTH, "title", &mut errors);
        FieldValidator::validate_required_string(&self.description, "description", &mut errors);
        FieldValidator::validate_slug(&self.slug, SLUG_MAX_LENGTH, &mut errors);

        errors.into_result()
    }
}
