use chrono::Local;
use serde::Serialize;
use shared_types::DATE_FORMAT;

use super::markup::{DATES_CONTAINER_ID, END_DATE_ID, START_DATE_ID};
use super::selection::DateRangeSelection;
use crate::notify::{HookError, HookResult};
use crate::utils::dom;

/// Options handed to the date-range picker widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerConfig {
    pub format: String,
    pub min_date: String,
    pub today_highlight: bool,
    pub show_on_focus: bool,
}

impl PickerConfig {
    /// Day/month/year display, nothing selectable before today.
    pub fn starting_today() -> Self {
        Self {
            format: "dd/mm/yyyy".to_string(),
            min_date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
            today_highlight: true,
            show_on_focus: true,
        }
    }
}

/// The date fields inside the availability dialog.
pub trait DateRangeInputs {
    /// Attach the range picker to the fields' container.
    fn attach_picker(&self, config: &PickerConfig) -> HookResult;

    /// Make both fields editable.
    fn enable(&self) -> HookResult;

    fn selection(&self) -> HookResult<DateRangeSelection>;
}

/// Date fields looked up by id in the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomDateRange;

impl DateRangeInputs for DomDateRange {
    fn attach_picker(&self, config: &PickerConfig) -> HookResult {
        let container = dom::element_by_id(DATES_CONTAINER_ID)?;
        attach_widget(&container, config)
    }

    fn enable(&self) -> HookResult {
        for id in [START_DATE_ID, END_DATE_ID] {
            dom::input_by_id(id)?.set_disabled(false);
        }
        Ok(())
    }

    fn selection(&self) -> HookResult<DateRangeSelection> {
        Ok(DateRangeSelection::new(
            dom::input_by_id(START_DATE_ID)?.value(),
            dom::input_by_id(END_DATE_ID)?.value(),
        ))
    }
}

#[cfg(feature = "hydrate")]
mod binding {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type DateRangePicker;

        #[wasm_bindgen(constructor, catch)]
        pub fn new(element: &web_sys::Element, options: &JsValue)
            -> Result<DateRangePicker, JsValue>;
    }
}

#[cfg(feature = "hydrate")]
fn attach_widget(container: &web_sys::Element, config: &PickerConfig) -> HookResult {
    #[allow(deprecated)]
    let options = wasm_bindgen::JsValue::from_serde(config)
        .map_err(|e| HookError::Widget(e.to_string()))?;
    binding::DateRangePicker::new(container, &options)
        .map_err(|e| HookError::Widget(format!("{e:?}")))?;
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
fn attach_widget(_container: &web_sys::Element, _config: &PickerConfig) -> HookResult {
    Err(HookError::Widget(
        "the date range picker only runs in the browser".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_options_use_widget_field_names() {
        let config = PickerConfig {
            min_date: "18/10/2026".to_string(),
            ..PickerConfig::starting_today()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "format": "dd/mm/yyyy",
                "minDate": "18/10/2026",
                "todayHighlight": true,
                "showOnFocus": true,
            })
        );
    }
}
