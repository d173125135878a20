pub mod home;
pub mod registration_form;
