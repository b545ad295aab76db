use std::collections::HashMap;

/// Field name to the messages raised against it.
pub type ValidationErrors = HashMap<String, Vec<String>>;

pub trait InputValidator {
    fn validate(&self) -> Result<(), ValidationErrors>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// Helper trait for collecting validation errors
pub trait ValidationErrorsExt {
    fn add_error(&mut self, field: &str, message: String);
    fn merge(&mut self, other: ValidationErrors);
    fn into_result(self) -> Result<(), ValidationErrors>;
    fn to_message(&self) -> String;
}

impl ValidationErrorsExt for ValidationErrors {
    fn add_error(&mut self, field: &str, message: String) {
        self.entry(field.to_string()).or_default().push(message);
    }

    fn merge(&mut self, other: ValidationErrors) {
        for (field, mut errors) in other {
            self.entry(field).or_default().append(&mut errors);
        }
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// `field: message` pairs, sorted by field so the output is stable.
    fn to_message(&self) -> String {
        let mut fields: Vec<&String> = self.keys().collect();
        fields.sort();
        fields
            .into_iter()
            .flat_map(|field| {
                self[field]
                    .iter()
                    .map(move |message| format!("{}: {}", field, message))
            })
            .collect::<Vec<String>>()
            .join(", ")
    }
}
