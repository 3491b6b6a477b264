use chrono::{Days, Local, NaiveDate};
use leptos::prelude::*;
use shared_types::DATE_FORMAT;

use crate::components::{
    day_block_toggle::{DayBlockToggle, MAX_BLOCKED_DAYS},
    notification_host::{LeptosRenderer, NotificationHost},
};
use crate::notify::{Inform, InformConfig, StackingContext};

fn upcoming_days(from: NaiveDate, count: u64) -> Vec<String> {
    (0..count)
        .filter_map(|offset| from.checked_add_days(Days::new(offset)))
        .map(|day| day.format(DATE_FORMAT).to_string())
        .collect()
}

/// Owner view listing the next two weeks, each with a block toggle.
#[component]
pub fn BlockDaysPage() -> impl IntoView {
    let stacking = use_context::<StackingContext>().unwrap_or_default();
    let renderer = LeptosRenderer::new(stacking);
    let inform = Inform::new(renderer, InformConfig::rich());
    let days = upcoming_days(Local::now().date_naive(), u64::from(MAX_BLOCKED_DAYS));

    view! {
        <div class="block-days" style="padding: 2rem; max-width: 900px; margin: 0 auto;">
            <h1>"Block days"</h1>
            <p>"Tick a day to keep it off the booking calendar."</p>
            <div class="block-days__list">
                {days
                    .into_iter()
                    .map(|date| view! { <DayBlockToggle inform=inform date=date/> })
                    .collect_view()}
            </div>
        </div>
        <NotificationHost renderer=renderer/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_consecutive_days_across_month_end() {
        let from = NaiveDate::from_ymd_opt(2024, 6, 29).unwrap();
        assert_eq!(
            upcoming_days(from, 3),
            ["29/06/2024", "30/06/2024", "01/07/2024"]
        );
    }
}
