//! Form container
//!
//! Owns the form state, provides it to the field renderers through context and
//! wires the submit button.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::input_basic::InputBasic;
use super::state::FormState;
use super::types::FormLayout;
use super::values::FormValues;
use crate::settings::UiSettings;

// ============================================================================
// Form Context
// ============================================================================

/// Handle to the enclosing form's state, available to every field
#[derive(Clone, Copy)]
pub struct FormContext {
    layout: StoredValue<FormLayout>,
    required_message: StoredValue<String>,
    state: RwSignal<FormState>,
}

impl FormContext {
    pub fn new(layout: FormLayout, required_message: String) -> Self {
        let state = RwSignal::new(FormState::new(&layout));
        Self {
            layout: StoredValue::new(layout),
            required_message: StoredValue::new(required_message),
            state,
        }
    }

    /// Current value of a field, empty when untouched
    pub fn value(&self, name: &str) -> String {
        self.state
            .with(|s| s.values.get(name).unwrap_or_default().to_string())
    }

    pub fn set_value(&self, name: &str, value: String) {
        let message = self.required_message.get_value();
        self.layout.with_value(|layout| {
            self.state
                .update(|s| s.set_value(layout, name, value, &message));
        });
    }

    pub fn has_error(&self, name: &str) -> bool {
        self.state.with(|s| s.has_error(name))
    }

    pub fn helper_text(&self, name: &str) -> String {
        self.state.with(|s| s.errors.helper_text(name))
    }

    pub fn is_password_visible(&self, name: &str) -> bool {
        self.state.with(|s| s.is_password_visible(name))
    }

    pub fn toggle_password(&self, name: &str) {
        self.state.update(|s| s.toggle_password(name));
        log::trace!("toggled password visibility for '{}'", name);
    }

    pub fn submit(&self) -> Option<FormValues> {
        let message = self.required_message.get_value();
        let mut submitted = None;
        self.layout.with_value(|layout| {
            self.state.update(|s| submitted = s.submit(layout, &message));
        });

        if submitted.is_none() {
            let first_error = self.layout.with_value(|layout| {
                self.state.with_untracked(|s| {
                    log::debug!(
                        "submit blocked, invalid fields: {}",
                        s.errors.names().collect::<Vec<_>>().join(", ")
                    );
                    s.first_error(layout).map(String::from)
                })
            });
            if let Some(name) = first_error {
                focus_field(&name);
            }
        }
        submitted
    }
}

/// Move keyboard focus to the control rendered for `name`
fn focus_field(name: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(name))
    else {
        return;
    };
    match element.dyn_into::<web_sys::HtmlElement>() {
        Ok(element) => {
            if let Err(e) = element.focus() {
                log::warn!("could not focus field '{}': {:?}", name, e);
            }
        }
        Err(_) => log::warn!("field '{}' is not focusable", name),
    }
}

// ============================================================================
// Form Component
// ============================================================================

/// Renders a layout row by row and calls `on_submit` with the values once
/// every required field is filled
#[component]
pub fn Form(
    layout: FormLayout,
    /// Receives the submitted record
    #[prop(into)]
    on_submit: Callback<FormValues>,
) -> impl IntoView {
    let settings = use_context::<UiSettings>().unwrap_or_default();

    if let Err(e) = layout.validate() {
        log::error!("invalid form layout: {}", e);
    }

    let ctx = FormContext::new(layout.clone(), settings.required_message.clone());
    provide_context(ctx);

    let on_form_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(values) = ctx.submit() {
            on_submit.run(values);
        }
    };

    view! {
        <form action="submit" on:submit=on_form_submit class="flex flex-col gap-[15px]">
            {layout.rows().iter().map(|row| {
                let fields = row.clone();
                view! {
                    <div class="flex flex-row gap-4 w-full">
                        {fields.into_iter().map(|descriptor| view! {
                            <InputBasic descriptor=descriptor />
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}

            <button
                type="submit"
                class="w-full px-4 py-2 bg-blue-600 text-white text-sm font-medium uppercase rounded shadow hover:bg-blue-700 transition-colors"
            >
                {settings.submit_label}
            </button>
        </form>
    }
}
