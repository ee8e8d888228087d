use leptos::prelude::*;

#[component]
pub fn Card(
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("rounded-lg border border-solid shadow-sm {class}")>
            <div class="p-6">{children()}</div>
        </div>
    }
}
