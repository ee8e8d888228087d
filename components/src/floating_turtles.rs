use crate::TurtleIcon;
use leptos::prelude::*;
use tracing::info;

// (position and size, emoji, opacity)
const TURTLES: [(&str, &str, &str); 13] = [
    ("absolute top-16 left-16 w-20 h-20", "🐢", "opacity-15"),
    ("absolute top-24 right-24 w-24 h-24", "🟢", "opacity-10"),
    ("absolute top-48 left-48 w-18 h-18", "🐢", "opacity-20"),
    ("absolute top-72 right-72 w-22 h-22", "🟫", "opacity-15"),
    ("absolute bottom-24 right-16 w-20 h-20", "🐢", "opacity-18"),
    ("absolute bottom-48 left-24 w-24 h-24", "🟢", "opacity-12"),
    ("absolute bottom-72 right-48 w-16 h-16", "🟫", "opacity-25"),
    ("absolute top-96 right-96 w-20 h-20", "🐢", "opacity-15"),
    ("absolute bottom-96 left-96 w-28 h-28", "🟢", "opacity-8"),
    ("absolute top-32 left-1/2 w-18 h-18", "🟫", "opacity-22"),
    ("absolute bottom-32 right-1/2 w-22 h-22", "🐢", "opacity-16"),
    ("absolute top-64 right-1/3 w-20 h-20", "🟢", "opacity-14"),
    ("absolute bottom-64 left-1/3 w-24 h-24", "🟫", "opacity-10"),
];

/// Decorative background. Ignores pointer events so it never blocks the page.
#[component]
pub fn FloatingTurtles() -> impl IntoView {
    info!("rendering <FloatingTurtles/>");

    view! {
        <div class="absolute inset-0 pointer-events-none">
            {TURTLES
                .into_iter()
                .map(|(class, emoji, opacity)| {
                    view! { <TurtleIcon class emoji opacity /> }
                })
                .collect_view()}
        </div>
    }
}
