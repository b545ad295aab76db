use super::input_validator::{ValidationErrors, ValidationErrorsExt};

pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_required_string(value: &str, field_name: &str, errors: &mut ValidationErrors) {
        if value.trim().is_empty() {
            errors.add_error(field_name, format!("{} cannot be empty", field_name));
        }
    }

    /// Counts characters, not bytes.
    pub fn validate_max_length(
        value: &str,
        max: usize,
        field_name: &str,
        errors: &mut ValidationErrors,
    ) {
        if value.chars().count() > max {
            errors.add_error(
                field_name,
                format!("{} must be at most {} characters", field_name, max),
            );
        }
    }

    /// Latin letters, digits, hyphen and underscore.
    pub fn validate_slug(slug: &str, max: usize, errors: &mut ValidationErrors) {
        if slug.is_empty() {
            errors.add_error("slug", "slug cannot be empty".to_string());
            return;
        }

        Self::validate_max_length(slug, max, "slug", errors);

        if !slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            errors.add_error(
                "slug",
                "slug may only contain latin letters, digits, hyphens and underscores".to_string(),
            );
        }
    }

    pub fn validate_required<T>(
        value: &Option<T>,
        field_name: &str,
        errors: &mut ValidationErrors,
    ) {
        if value.is_none() {
            errors.add_error(field_name, format!("{} is required", field_name));
        }
    }
}
