//! Declarative Registration Form
//!
//! Renders a form from rows of field descriptors:
//! - `types`: field descriptors, widget selection and layout checks
//! - `values` / `validation` / `state`: form values, required-field errors and submit handling
//! - `form` / `input_basic`: the Leptos components

pub mod types;
pub mod values;
pub mod validation;
pub mod state;
pub mod form;
pub mod input_basic;

pub use types::*;
pub use values::*;
pub use validation::*;
pub use state::*;
pub use form::*;
pub use input_basic::*;
