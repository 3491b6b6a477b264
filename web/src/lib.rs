#![recursion_limit = "512"]

pub mod app;
pub mod availability;
pub mod components;
pub mod form_guard;
pub mod notify;
pub mod utils;
pub mod views;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);

    let guarded = form_guard::install_form_guards();
    leptos::logging::log!("validation guard installed on {guarded} form(s)");
}
