use leptos::prelude::*;
use leptos_router::components::A;

use crate::views::room::ROOMS;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="homepage-container" style="padding: 2rem; max-width: 1200px; margin: 0 auto;">
            <div style="text-align: center; margin-bottom: 3rem;">
                <h1 style="font-size: 3rem; margin-bottom: 1rem;">"Bookings"</h1>
                <p style="font-size: 1.2rem; color: #666; margin-bottom: 2rem;">
                    "Pick a room and check your dates"
                </p>
            </div>

            <div style="display: flex; gap: 2rem; justify-content: center; margin-bottom: 3rem;">
                {ROOMS
                    .iter()
                    .map(|room| {
                        view! {
                            <A href=format!("/rooms/{}", room.id)>
                                <button class="btn-primary">{room.name}</button>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
