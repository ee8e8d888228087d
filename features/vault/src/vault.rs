use crate::{AmountInput, TokenRow, VaultActions};
use leptos::prelude::*;
use lucide_leptos::{ArrowDown, ChevronDown};
use tracing::info;
use turtle_components::Card;
use turtle_core::{VaultForm, VAULT};

#[component]
pub fn VaultPanel() -> impl IntoView {
    info!("rendering <VaultPanel/>");

    on_cleanup(move || {
        info!("cleaning up <VaultPanel/>");
    });

    let form = VaultForm::new();

    let current_token = Signal::derive(move || form.side.get().current_token(&VAULT).clone());
    let receive_token = Signal::derive(move || form.side.get().receive_token(&VAULT).clone());
    let current_balance = move || current_token.with(|token| token.balance.clone());

    // recomputed from the raw inputs on every read
    let estimate = Signal::derive(move || form.estimated_receive(&VAULT));
    let actions_enabled = Signal::derive(move || form.actions_enabled());

    view! {
        <Card class="w-full max-w-md bg-white/90 backdrop-blur-sm border-green-200 shadow-xl">
            // From wallet
            <div class="space-y-4 mb-6">
                <div class="text-sm font-medium text-green-700 mb-2">"From wallet"</div>
                <TokenRow
                    token=current_token
                    class="bg-green-50 border-green-200 text-green-800"
                >
                    <div class="flex items-center space-x-2">
                        <div class="text-right font-semibold">{current_balance}</div>
                        <button
                            type="button"
                            aria-label="switch token"
                            class="p-1 rounded border-none bg-transparent text-green-500 hover:bg-green-100"
                            on:click=move |_| form.toggle_side()
                        >
                            <ChevronDown size=16 />
                        </button>
                    </div>
                </TokenRow>
                <AmountInput amount=form.amount />
                <div class="text-sm text-green-600">"Balance: "{current_balance}</div>
            </div>

            // To vault
            <div class="flex flex-col items-center mb-6">
                <div class="flex items-center space-x-2 text-green-600 mb-2">
                    <ArrowDown size=20 />
                    <span class="text-sm font-medium">"To vault"</span>
                </div>
                <div class="w-full box-border p-3 bg-emerald-50 rounded-lg border border-solid border-emerald-200 text-center">
                    <div class="text-sm text-emerald-600 mb-1">"Vault"</div>
                    <div class="font-semibold text-emerald-800">{VAULT.name.clone()}</div>
                </div>
            </div>

            // You will receive
            <div class="space-y-4 mb-6">
                <div class="text-sm font-medium text-green-700">"You will receive"</div>
                <TokenRow
                    token=receive_token
                    class="bg-emerald-50 border-emerald-200 text-emerald-800"
                >
                    <div class="text-right font-semibold">{move || estimate.get()}</div>
                </TokenRow>
            </div>

            <VaultActions side=form.side enabled=actions_enabled />
        </Card>
    }
}
