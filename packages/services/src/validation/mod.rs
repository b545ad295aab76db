pub mod field_validators;
pub mod input_validator;
pub mod inputs;

// Re-export common types
pub use input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};
pub use inputs::{NewCategoryInput, NewLocationInput, NewPostInput};
