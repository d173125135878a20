//! Field renderer
//!
//! Maps a field descriptor to an outlined text input, a select list or a date
//! input, with a label above and helper text below.

use leptos::prelude::*;

use super::form::FormContext;
use super::types::{FieldDescriptor, Widget};

const INPUT_BASE: &str =
    "w-full px-3 py-2.5 text-sm bg-white border rounded focus:outline-none focus:ring-2";

fn outline_class(is_error: bool) -> String {
    if is_error {
        format!("{} border-red-600 focus:ring-red-500", INPUT_BASE)
    } else {
        format!("{} border-gray-300 focus:ring-blue-500", INPUT_BASE)
    }
}

// ============================================================================
// Input Basic
// ============================================================================

/// One full-width form control bound to the enclosing [`FormContext`]
#[component]
pub fn InputBasic(descriptor: FieldDescriptor) -> impl IntoView {
    let ctx = expect_context::<FormContext>();
    let name = descriptor.name.clone();

    let is_error = Memo::new({
        let name = name.clone();
        move |_| ctx.has_error(&name)
    });
    let helper_text = Memo::new({
        let name = name.clone();
        move |_| ctx.helper_text(&name)
    });
    let is_filled = Memo::new({
        let name = name.clone();
        move |_| !ctx.value(&name).is_empty()
    });

    let shrink = descriptor.label_shrink().unwrap_or(false);
    let container_class = move || {
        if is_filled.get() {
            "field field-filled relative w-full"
        } else {
            "field relative w-full"
        }
    };
    let label_class = move || {
        let color = if is_error.get() { "text-red-600" } else { "text-gray-600" };
        if shrink {
            format!("field-label field-label-shrink {}", color)
        } else {
            format!("field-label {}", color)
        }
    };

    let widgets = descriptor
        .widgets()
        .into_iter()
        .map(|widget| match widget {
            Widget::TextInput => view! {
                <TextInput descriptor=descriptor.clone() is_error=is_error />
            }
            .into_any(),
            Widget::Select(values) => view! {
                <SelectInput name=name.clone() values=values is_error=is_error />
            }
            .into_any(),
            Widget::DateInput => view! {
                <DateInput name=name.clone() is_error=is_error />
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <div class=container_class>
            <label for=name.clone() class=label_class>
                {descriptor.label.clone()}
            </label>
            {widgets}
            <p
                id=format!("{}-helper-text", name)
                class=move || {
                    if is_error.get() {
                        "mt-1 mx-3 text-xs text-red-600 whitespace-pre"
                    } else {
                        "mt-1 mx-3 text-xs text-gray-500 whitespace-pre"
                    }
                }
            >
                {move || helper_text.get()}
            </p>
        </div>
    }
}

// ============================================================================
// Text Input
// ============================================================================

/// Text, email and password input; passwords get a visibility toggle
#[component]
fn TextInput(descriptor: FieldDescriptor, is_error: Memo<bool>) -> impl IntoView {
    let ctx = expect_context::<FormContext>();
    let name = descriptor.name.clone();

    let show_password = Memo::new({
        let name = name.clone();
        move |_| ctx.is_password_visible(&name)
    });
    let input_type = {
        let descriptor = descriptor.clone();
        move || descriptor.input_type(show_password.get())
    };

    let name_for_value = name.clone();
    let name_for_input = name.clone();
    let name_for_toggle = name.clone();

    view! {
        <div class="relative flex items-center">
            <input
                id=name.clone()
                name=name.clone()
                type=input_type
                class=move || outline_class(is_error.get())
                aria-invalid=move || is_error.get().to_string()
                prop:value=move || ctx.value(&name_for_value)
                on:input=move |ev| ctx.set_value(&name_for_input, event_target_value(&ev))
            />
            {descriptor.is_password().then(|| view! {
                <button
                    type="button"
                    aria-label="toggle password visibility"
                    class="absolute right-2 px-2 py-1 text-xs text-gray-600 rounded hover:bg-gray-100"
                    on:click=move |_| ctx.toggle_password(&name_for_toggle)
                >
                    {move || FieldDescriptor::password_toggle_label(show_password.get())}
                </button>
            })}
        </div>
    }
}

// ============================================================================
// Select Input
// ============================================================================

/// Select list defaulting to its first option
#[component]
fn SelectInput(name: String, values: Vec<String>, is_error: Memo<bool>) -> impl IntoView {
    let ctx = expect_context::<FormContext>();
    let name_for_value = name.clone();
    let name_for_change = name.clone();

    view! {
        <select
            id=name.clone()
            name=name.clone()
            class=move || outline_class(is_error.get())
            prop:value=move || ctx.value(&name_for_value)
            on:change=move |ev| ctx.set_value(&name_for_change, event_target_value(&ev))
        >
            {values.into_iter().map(|val| {
                let name = name.clone();
                let option_value = val.clone();
                let val_for_selected = val.clone();
                view! {
                    <option
                        value=option_value
                        selected=move || ctx.value(&name) == val_for_selected
                    >
                        {val}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

// ============================================================================
// Date Input
// ============================================================================

#[component]
fn DateInput(name: String, is_error: Memo<bool>) -> impl IntoView {
    let ctx = expect_context::<FormContext>();
    let name_for_value = name.clone();
    let name_for_input = name.clone();

    view! {
        <input
            type="date"
            id=name.clone()
            name=name.clone()
            class=move || format!("{} notched", outline_class(is_error.get()))
            prop:value=move || ctx.value(&name_for_value)
            on:input=move |ev| ctx.set_value(&name_for_input, event_target_value(&ev))
        />
    }
}
