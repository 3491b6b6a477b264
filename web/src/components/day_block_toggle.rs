use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::notification_host::LeptosRenderer;
use crate::notify::{
    DialogInput, DialogLifecycleHooks, DialogRequest, HookError, HookResult, Inform,
    InputConstraints, InputKind, ToastParams,
};

pub const MAX_BLOCKED_DAYS: u8 = 14;

/// Day count typed into the block dialog, kept as text so an empty field
/// still reads as "nothing chosen".
fn parse_day_count(input: Option<&str>) -> HookResult<String> {
    let raw = input.unwrap_or_default().trim();
    if raw.is_empty() {
        return Ok(String::new());
    }
    match raw.parse::<u8>() {
        Ok(days) if (1..=MAX_BLOCKED_DAYS).contains(&days) => Ok(days.to_string()),
        _ => Err(HookError::Invalid(format!(
            "Choose between 1 and {MAX_BLOCKED_DAYS} days"
        ))),
    }
}

fn block_request(date: &str) -> DialogRequest {
    DialogRequest::new("Block days")
        .body(format!("<p>Starting on <strong>{date}</strong></p>"))
        .input(
            DialogInput::new(InputKind::Number)
                .label("Number of days to block")
                .constraints(InputConstraints::range(1, MAX_BLOCKED_DAYS, 1))
                .initial_value("1"),
        )
        .presentation_class("day-block-toggle")
        .confirm_label("Block")
}

fn blocked_message(days: &str, date: &str) -> String {
    match days {
        "1" => format!("Blocked {date}"),
        _ => format!("Blocked {days} days from {date}"),
    }
}

/// Owner calendar checkbox. Ticking it asks how many days to block;
/// cancelling the dialog unticks it again.
#[component]
pub fn DayBlockToggle(inform: Inform<LeptosRenderer>, #[prop(into)] date: String) -> impl IntoView {
    let checked = RwSignal::new(false);
    let date = StoredValue::new(date);

    let on_change = move |ev| {
        let ticked = event_target_checked(&ev);
        checked.set(ticked);
        if !ticked {
            return;
        }

        let date = date.get_value();
        spawn_local(async move {
            let hooks = DialogLifecycleHooks::new()
                .pre_confirm(parse_day_count)
                .on_cancel(move || checked.set(false));
            let shown = inform
                .custom_modal_with(block_request(&date), hooks, |days: Option<String>| {
                    if let Some(days) = days {
                        inform.toast(ToastParams::new(blocked_message(&days, &date)));
                    }
                })
                .await;
            if let Err(err) = shown {
                error!("block dialog failed: {err}");
                checked.set(false);
            }
        });
    };

    view! {
        <label class="day-block-toggle">
            <input type="checkbox" prop:checked=move || checked.get() on:change=on_change/>
            {move || date.get_value()}
        </label>
    }
}
