use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::Navbar;
use crate::notify::StackingContext;
use crate::utils::dom::CSRF_META_NAME;
use crate::views::{
    block_days::BlockDaysPage, home::HomePage, not_found::NotFoundPage, room::RoomPage,
};

const DATEPICKER_CSS: &str =
    "https://cdn.jsdelivr.net/npm/vanillajs-datepicker@1.3.4/dist/css/datepicker-bs5.min.css";
const DATEPICKER_JS: &str =
    "https://cdn.jsdelivr.net/npm/vanillajs-datepicker@1.3.4/dist/js/datepicker-full.min.js";

/// Per-render token for the availability form; the client reads it back from
/// the meta tag.
fn csrf_token() -> String {
    #[cfg(feature = "ssr")]
    {
        uuid::Uuid::new_v4().simple().to_string()
    }
    #[cfg(not(feature = "ssr"))]
    {
        String::new()
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <meta name=CSRF_META_NAME content=csrf_token()/>
                    <link rel="stylesheet" href=DATEPICKER_CSS/>
                    // Defines the global DateRangePicker the availability dialog binds to.
                    <script src=DATEPICKER_JS></script>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(StackingContext::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/web.css"/>
        <Title text="Bookings"/>

        <ConfigProvider>
            <Router>
                <Navbar/>
                <main>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=(StaticSegment("rooms"), ParamSegment("id")) view=RoomPage/>
                        <Route path=(StaticSegment("admin"), StaticSegment("block-days")) view=BlockDaysPage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
