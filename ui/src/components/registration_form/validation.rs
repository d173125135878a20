//! Required-field validation

use std::collections::BTreeMap;
use thiserror::Error;

use super::types::{FieldDescriptor, FormLayout};
use super::values::FormValues;

/// Helper text for fields without an error; keeps the line height reserved
pub const EMPTY_HELPER_TEXT: &str = " ";

/// Validation error attached to a single field
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{message}")]
    Required { message: String },
}

/// Field errors keyed by field name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, FieldError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FieldError> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: &str, error: FieldError) {
        self.0.insert(name.to_string(), error);
    }

    pub fn remove(&mut self, name: &str) {
        self.0.remove(name);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Error message for the field, or a single space when it has none
    pub fn helper_text(&self, name: &str) -> String {
        self.get(name)
            .map(ToString::to_string)
            .unwrap_or_else(|| EMPTY_HELPER_TEXT.to_string())
    }
}

pub fn validate_field(
    field: &FieldDescriptor,
    values: &FormValues,
    required_message: &str,
) -> Option<FieldError> {
    (field.is_required && values.is_blank(&field.name)).then(|| FieldError::Required {
        message: required_message.to_string(),
    })
}

/// Validate every field and build the submitted record
pub fn validate(
    layout: &FormLayout,
    values: &FormValues,
    required_message: &str,
) -> Result<FormValues, FormErrors> {
    let mut errors = FormErrors::default();
    for field in layout.fields() {
        if let Some(error) = validate_field(field, values, required_message) {
            errors.insert(&field.name, error);
        }
    }

    if errors.is_empty() {
        Ok(values.record(layout))
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::registration_form::types::FieldType;
    use crate::settings::DEFAULT_REQUIRED_MESSAGE;

    fn layout() -> FormLayout {
        FormLayout::new(vec![
            vec![
                FieldDescriptor::new("FirstName", FieldType::Text, "firstName"),
                FieldDescriptor::new("Email", FieldType::Text, "email").required(),
            ],
        ])
    }

    #[test]
    fn test_blank_required_field_fails() {
        let errors = validate(&layout(), &FormValues::default(), DEFAULT_REQUIRED_MESSAGE)
            .unwrap_err();
        assert_eq!(errors.names().collect::<Vec<_>>(), vec!["email"]);
        assert_eq!(errors.helper_text("email"), "This field is required");
    }

    #[test]
    fn test_optional_fields_may_be_blank() {
        let mut values = FormValues::default();
        values.set("email", "someone@example.com");

        let record = validate(&layout(), &values, DEFAULT_REQUIRED_MESSAGE).unwrap();
        assert_eq!(record.get("firstName"), Some(""));
        assert_eq!(record.get("email"), Some("someone@example.com"));
    }

    #[test]
    fn test_whitespace_satisfies_required() {
        let mut values = FormValues::default();
        values.set("email", "   ");
        let record = validate(&layout(), &values, DEFAULT_REQUIRED_MESSAGE).unwrap();
        assert_eq!(record.get("email"), Some("   "));
    }

    #[test]
    fn test_helper_text_without_error_is_space() {
        assert_eq!(FormErrors::default().helper_text("email"), " ");
    }

    #[test]
    fn test_custom_required_message() {
        let errors = validate(&layout(), &FormValues::default(), "Campo obligatorio").unwrap_err();
        assert_eq!(errors.helper_text("email"), "Campo obligatorio");
    }
}
