use leptos::prelude::*;

pub mod components;
pub mod error;
pub mod settings;
pub mod types;

use components::home::Home;
use settings::UiSettings;

#[component]
pub fn App(settings: UiSettings) -> impl IntoView {
    provide_context(settings);

    view! {
        <Home />
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let loaded = UiSettings::bundled();
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    if let Err(e) = console_log::init_with_level(settings.level()) {
        web_sys::console::warn_1(&format!("console logger not installed: {}", e).into());
    }
    if let Err(e) = loaded {
        log::warn!("using default settings: {}", e);
    }

    log::info!("starting registration form");
    leptos::mount::mount_to_body(move || view! { <App settings=settings /> });
}
