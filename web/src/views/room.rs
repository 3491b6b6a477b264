use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::{
    check_availability::CheckAvailability,
    error::ErrorView,
    notification_host::{LeptosRenderer, NotificationHost},
};
use crate::notify::{Inform, InformConfig, NoticeKind, StackingContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const ROOMS: [Room; 2] = [
    Room {
        id: "1",
        name: "General's Quarters",
        description: "A quiet corner room with a view over the harbour.",
    },
    Room {
        id: "2",
        name: "Major's Suite",
        description: "Our largest suite, with a separate sitting room.",
    },
];

pub fn find_room(id: &str) -> Option<Room> {
    ROOMS.iter().copied().find(|room| room.id == id)
}

/// Query keys a redirect may use to leave a one-off notice on the page.
const FLASH_KEYS: [(&str, NoticeKind); 3] = [
    ("flash", NoticeKind::Success),
    ("warning", NoticeKind::Warning),
    ("error", NoticeKind::Error),
];

fn flash_notices(lookup: impl Fn(&str) -> Option<String>) -> Vec<(String, NoticeKind)> {
    FLASH_KEYS
        .iter()
        .filter_map(|(key, kind)| {
            lookup(key)
                .filter(|message| !message.trim().is_empty())
                .map(|message| (message, *kind))
        })
        .collect()
}

#[component]
pub fn RoomPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let stacking = use_context::<StackingContext>().unwrap_or_default();
    let renderer = LeptosRenderer::new(stacking);
    let inform = Inform::new(renderer, InformConfig::rich());

    let room_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    Effect::new(move |_| {
        let notices = query.with_untracked(|query| flash_notices(|key| query.get(key)));
        for (message, kind) in notices {
            inform.notify(message, kind, None);
        }
    });

    view! {
        <div class="room-page" style="padding: 2rem; max-width: 900px; margin: 0 auto;">
            {move || {
                let id = room_id.get();
                match find_room(&id) {
                    Some(room) => view! {
                        <h1>{room.name}</h1>
                        <p class="room-page__description">{room.description}</p>
                        <div style="text-align: center; margin-top: 2rem;">
                            <CheckAvailability inform=inform room_id=room.id/>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <ErrorView message=format!("There is no room with id \"{id}\".")/>
                    }
                    .into_any(),
                }
            }}
        </div>
        <NotificationHost renderer=renderer/>
    }
}
