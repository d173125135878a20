//! Registration page

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::registration_form::{FieldDescriptor, FieldType, Form, FormLayout, FormValues};
use crate::settings::UiSettings;

/// Fields shown on the registration page
pub fn options() -> FormLayout {
    FormLayout::new(vec![
        vec![
            FieldDescriptor::new("FirstName", FieldType::Text, "firstName"),
            FieldDescriptor::new("LastName", FieldType::Text, "lastName"),
        ],
        vec![FieldDescriptor::new("Email", FieldType::Text, "email").required()],
        vec![FieldDescriptor::new("Password", FieldType::Password, "password")],
        vec![FieldDescriptor::new("Order", FieldType::Select, "order")
            .with_select_values(["Admin", "User"])],
        vec![FieldDescriptor::new("BirthDate", FieldType::Date, "birthdate")],
    ])
}

/// Write the submitted values to the browser console as a plain object
fn log_submission(values: &FormValues) {
    let payload = values.to_json().to_string();
    log::info!("registration submitted: {}", payload);

    match js_sys::JSON::parse(&payload) {
        Ok(object) => web_sys::console::log_1(&object),
        Err(e) => log::warn!("could not convert submission to a JS object: {:?}", e),
    }
}

#[component]
pub fn Home() -> impl IntoView {
    let notice_millis = use_context::<UiSettings>()
        .unwrap_or_default()
        .notice_millis;
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |values: FormValues| {
        log_submission(&values);

        set_submitted.set(true);
        Timeout::new(notice_millis, move || set_submitted.set(false)).forget();
    };

    view! {
        <main class="min-h-screen bg-gray-100 flex items-start justify-center p-8">
            <div class="w-full max-w-xl bg-white rounded-lg shadow p-6">
                <Show when=move || submitted.get()>
                    <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-6">
                        "Registration submitted"
                    </div>
                </Show>
                <Form layout=options() on_submit=on_submit />
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_layout() {
        let layout = options();
        assert!(layout.validate().is_ok());
        assert_eq!(layout.rows().len(), 5);
        assert_eq!(layout.rows()[0].len(), 2);

        let names: Vec<&str> = layout.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["firstName", "lastName", "email", "password", "order", "birthdate"]
        );
    }

    #[test]
    fn test_only_email_is_required() {
        let layout = options();
        let required: Vec<&str> = layout
            .fields()
            .filter(|f| f.is_required)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(required, vec!["email"]);
    }
}
