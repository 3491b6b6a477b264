use leptos::prelude::*;
use leptos_router::components::A;

use crate::notify::StackingContext;

#[component]
pub fn Navbar() -> impl IntoView {
    // Drops under banner notices while any are showing.
    let stacking = use_context::<StackingContext>().unwrap_or_default();

    view! {
        <nav id="navbar" class="navbar" style:z-index=move || stacking.navbar_z_index().to_string()>
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "Bookings"
                    </A>
                </div>

                <div class="navbar__links">
                    <A href="/rooms/1" attr:class="navbar__link">
                        "General's Quarters"
                    </A>
                    <A href="/rooms/2" attr:class="navbar__link">
                        "Major's Suite"
                    </A>
                    <A href="/admin/block-days" attr:class="navbar__link navbar__link--cta">
                        "Block Days"
                    </A>
                </div>
            </div>
        </nav>
    }
}
