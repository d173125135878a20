//! Form state owned by the form container
//!
//! Validation runs on submit. Once a submit has been attempted, every edit
//! re-validates the edited field so its error clears as soon as it is filled.

use std::collections::BTreeSet;

use super::types::FormLayout;
use super::validation::{validate, validate_field, FormErrors};
use super::values::FormValues;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FormErrors,
    pub submit_count: u32,
    show_password: BTreeSet<String>,
}

impl FormState {
    pub fn new(layout: &FormLayout) -> Self {
        Self {
            values: FormValues::initial(layout),
            ..Default::default()
        }
    }

    pub fn set_value(
        &mut self,
        layout: &FormLayout,
        name: &str,
        value: impl Into<String>,
        required_message: &str,
    ) {
        self.values.set(name, value);

        if self.submit_count == 0 {
            return;
        }
        if let Some(field) = layout.field(name) {
            match validate_field(field, &self.values, required_message) {
                Some(error) => self.errors.insert(name, error),
                None => self.errors.remove(name),
            }
        }
    }

    pub fn has_error(&self, name: &str) -> bool {
        self.errors.get(name).is_some()
    }

    pub fn toggle_password(&mut self, name: &str) {
        if !self.show_password.remove(name) {
            self.show_password.insert(name.to_string());
        }
    }

    pub fn is_password_visible(&self, name: &str) -> bool {
        self.show_password.contains(name)
    }

    /// First field in layout order that currently shows an error
    pub fn first_error<'a>(&self, layout: &'a FormLayout) -> Option<&'a str> {
        layout
            .fields()
            .map(|f| f.name.as_str())
            .find(|name| self.has_error(name))
    }

    /// Returns the submitted record, or `None` when validation blocks it
    pub fn submit(&mut self, layout: &FormLayout, required_message: &str) -> Option<FormValues> {
        self.submit_count += 1;
        match validate(layout, &self.values, required_message) {
            Ok(record) => {
                self.errors = FormErrors::default();
                Some(record)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}
