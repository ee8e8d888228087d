use leptos::prelude::*;
use tracing::debug;

#[component]
pub fn AmountInput(amount: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="relative">
            <input
                id="vault-amount"
                type="number"
                inputmode="decimal"
                placeholder="0"
                autocomplete="off"
                class="w-full box-border h-10 px-3 pr-16 text-lg font-semibold rounded-md
                border border-solid border-green-200 focus:border-green-400"
                prop:value=move || amount.get()
                on:input=move |ev| amount.set(event_target_value(&ev))
            />
            // NOTE: there are no real balances to fill in, so this stays inert
            <button
                type="button"
                class="absolute right-3 top-1/2 -translate-y-1/2 border-none bg-transparent
                text-sm font-medium text-green-700 hover:text-green-800"
                on:click=move |_| debug!("MAX pressed")
            >
                "MAX"
            </button>
        </div>
    }
}
