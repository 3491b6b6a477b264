use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div style="min-height: 60vh; display: flex; align-items: center; justify-content: center; padding: 1rem;">
            <div style="max-width: 600px; width: 100%; text-align: center;">
                <div style="font-size: 6rem; font-weight: 900; color: #0d6efd; line-height: 1;">
                    "404"
                </div>
                <h1 style="font-size: 2rem; font-weight: 700; color: #2d3748; margin: 1rem 0;">
                    "Page Not Found"
                </h1>
                <p style="font-size: 1.1rem; color: #4a5568; margin: 0 0 2rem 0;">
                    "The page you're looking for doesn't exist or may have been moved."
                </p>
                <A href="/">
                    <button class="btn-primary">"Back to the rooms"</button>
                </A>
            </div>
        </div>
    }
}
