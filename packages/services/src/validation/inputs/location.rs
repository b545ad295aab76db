use models::NAME_MAX_LENGTH;
use serde::Deserialize;

use crate::validation::field_validators::FieldValidator;
use crate::validation::input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};

#[derive(Clone, Debug, Deserialize)]
pub struct NewLocationInput {
    pub name: String,
    pub is_published: Option<bool>,
}

impl InputValidator for NewLocationInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(&self.name, "name", &mut errors);
        FieldValidator::validate_max_length(&self.name, NAME_MAX_LENGTH, "name", &mut errors);

        errors.into_result()
    }
}
