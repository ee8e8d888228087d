use leptos::prelude::*;

#[component]
pub fn TurtleIcon(
    /// Position and size classes
    #[prop(default = "w-16 h-16")]
    class: &'static str,
    #[prop(default = "🐢")] emoji: &'static str,
    #[prop(default = "opacity-20")] opacity: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "{class} {opacity} text-4xl flex items-center justify-center animate-pulse",
        )>{emoji}</div>
    }
}
