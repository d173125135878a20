//! Error types for form definitions and UI settings

use thiserror::Error;

/// Errors raised while building a form layout or loading settings.
///
/// These never come from user input; a bad value typed into a field is a
/// [`FieldError`](crate::components::registration_form::FieldError) instead.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Duplicate field name: '{0}'")]
    DuplicateField(String),

    #[error("Field name must not be empty")]
    EmptyFieldName,

    #[error("Select field '{0}' has no values to choose from")]
    MissingSelectValues(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
