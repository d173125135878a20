//! Form values keyed by field name

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::types::FormLayout;

/// Flat mapping from field name to its current string value
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    /// Values before any user input: each select starts on its first option
    pub fn initial(layout: &FormLayout) -> Self {
        Self(
            layout
                .fields()
                .filter_map(|f| f.default_value().map(|v| (f.name.clone(), v)))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).map_or(true, str::is_empty)
    }

    /// One entry per layout field, untouched fields as `""`
    pub fn record(&self, layout: &FormLayout) -> Self {
        Self(
            layout
                .fields()
                .map(|f| {
                    let value = self.get(&f.name).unwrap_or_default().to_string();
                    (f.name.clone(), value)
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::registration_form::types::{FieldDescriptor, FieldType};
    use serde_json::json;

    fn layout() -> FormLayout {
        FormLayout::new(vec![
            vec![FieldDescriptor::new("Email", FieldType::Email, "email")],
            vec![FieldDescriptor::new("Order", FieldType::Select, "order")
                .with_select_values(["Admin", "User"])],
        ])
    }

    #[test]
    fn test_initial_values_select_first_option() {
        let values = FormValues::initial(&layout());
        assert_eq!(values.get("order"), Some("Admin"));
        assert_eq!(values.get("email"), None);
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_is_blank() {
        let mut values = FormValues::default();
        assert!(values.is_blank("email"));
        values.set("email", "");
        assert!(values.is_blank("email"));
        values.set("email", "   ");
        assert!(!values.is_blank("email"));
        values.set("email", "a@b.c");
        assert!(!values.is_blank("email"));
    }

    #[test]
    fn test_record_fills_every_field() {
        let values = FormValues::initial(&layout()).record(&layout());
        assert_eq!(values.to_json(), json!({ "email": "", "order": "Admin" }));
    }
}
