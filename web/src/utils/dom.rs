//! Lookups against the live document for dialog hooks and page bootstrapping.
use leptos::prelude::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::notify::{HookError, HookResult};

pub const CSRF_META_NAME: &str = "csrf-token";

pub fn element_by_id(id: &str) -> HookResult<Element> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| HookError::MissingElement(id.to_string()))
}

pub fn input_by_id(id: &str) -> HookResult<HtmlInputElement> {
    element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| HookError::MissingElement(id.to_string()))
}

/// CSRF token the server rendered into `<meta name="csrf-token">`.
/// Empty on the server and when the tag is absent.
pub fn csrf_token() -> String {
    #[cfg(feature = "hydrate")]
    {
        let selector = format!("meta[name=\"{CSRF_META_NAME}\"]");
        if let Ok(Some(meta)) = document().query_selector(&selector) {
            if let Some(token) = meta.get_attribute("content") {
                return token;
            }
        }
        leptos::logging::warn!("no csrf-token meta tag on this page");
    }

    String::new()
}
