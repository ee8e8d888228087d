use leptos::prelude::*;
use tracing::debug;
use turtle_core::Side;

/// The primary and secondary action buttons. Their labels follow the side; neither submits
/// anything.
#[component]
pub fn VaultActions(
    #[prop(into)] side: Signal<Side>,
    #[prop(into)] enabled: Signal<bool>,
) -> impl IntoView {
    let primary = move || side.get().primary_action();
    let secondary = move || side.get().secondary_action();

    view! {
        <div class="space-y-3">
            <button
                class="w-full py-3 px-6 rounded-md border-none font-semibold text-white
                bg-gradient-to-r from-green-600 to-emerald-600
                hover:from-green-700 hover:to-emerald-700 disabled:opacity-50"
                disabled=move || !enabled.get()
                on:click=move |_| debug!("{} pressed", primary())
            >
                {move || primary().label()}
            </button>
            <button
                class="w-full py-2 px-6 rounded-md bg-transparent text-green-700
                border border-solid border-green-200 hover:bg-green-50 disabled:opacity-50"
                disabled=move || !enabled.get()
                on:click=move |_| debug!("{} pressed", secondary())
            >
                {move || secondary().label()}
            </button>
        </div>
    }
}
