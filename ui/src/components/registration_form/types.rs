//! Field descriptors and form layout

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::FormError;

// ============================================================================
// Field Type
// ============================================================================

/// Kind of control a field descriptor asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Password,
    Select,
    Date,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Select => "select",
            FieldType::Date => "date",
        }
    }

    /// Rendered as a plain outlined input
    pub fn is_text(&self) -> bool {
        matches!(self, FieldType::Text | FieldType::Email | FieldType::Password)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Widget
// ============================================================================

/// Widget shape rendered for a descriptor
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Widget {
    TextInput,
    Select(Vec<String>),
    DateInput,
}

// ============================================================================
// Field Descriptor
// ============================================================================

/// Declarative description of one form control
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub name: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default, rename = "selectValue", skip_serializing_if = "Option::is_none")]
    pub select_values: Option<Vec<String>>,
}

impl FieldDescriptor {
    pub fn new(label: &str, field_type: FieldType, name: &str) -> Self {
        Self {
            label: label.to_string(),
            field_type,
            name: name.to_string(),
            is_required: false,
            select_values: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn with_select_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Widgets to render, in order.
    ///
    /// The select list follows the presence of values rather than the type,
    /// so any descriptor carrying values gets one. A `select` without values
    /// renders no widget at all.
    pub fn widgets(&self) -> Vec<Widget> {
        let mut widgets = Vec::new();
        if self.field_type.is_text() {
            widgets.push(Widget::TextInput);
        }
        if let Some(values) = &self.select_values {
            widgets.push(Widget::Select(values.clone()));
        }
        if self.field_type == FieldType::Date {
            widgets.push(Widget::DateInput);
        }
        widgets
    }

    /// HTML input type for the text widget
    pub fn input_type(&self, show_password: bool) -> &'static str {
        if show_password {
            "text"
        } else {
            self.field_type.as_str()
        }
    }

    /// `Some(true)` pins the label above the input
    pub fn label_shrink(&self) -> Option<bool> {
        (self.field_type == FieldType::Date).then_some(true)
    }

    /// Initial value: the first select option
    pub fn default_value(&self) -> Option<String> {
        self.select_values.as_ref()?.first().cloned()
    }

    /// Text of the password visibility toggle
    pub fn password_toggle_label(visible: bool) -> &'static str {
        if visible {
            "Show"
        } else {
            "Not Show"
        }
    }

    pub fn is_password(&self) -> bool {
        self.field_type == FieldType::Password
    }
}

// ============================================================================
// Form Layout
// ============================================================================

/// Rows of field descriptors, rendered top to bottom and left to right
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormLayout {
    rows: Vec<Vec<FieldDescriptor>>,
}

impl FormLayout {
    pub fn new(rows: Vec<Vec<FieldDescriptor>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<FieldDescriptor>] {
        &self.rows
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.rows.iter().flatten()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields().find(|f| f.name == name)
    }

    /// Field names must be present and unique, and select fields need values
    pub fn validate(&self) -> Result<(), FormError> {
        let mut seen = HashSet::new();
        for field in self.fields() {
            if field.name.trim().is_empty() {
                return Err(FormError::EmptyFieldName);
            }
            if !seen.insert(field.name.as_str()) {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
            if field.field_type == FieldType::Select
                && field.select_values.as_ref().map_or(true, |v| v.is_empty())
            {
                return Err(FormError::MissingSelectValues(field.name.clone()));
            }
        }
        Ok(())
    }
}
