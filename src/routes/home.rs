use leptos::prelude::*;
use tracing::info;
use turtle_vault::VaultPanel;

#[component]
pub fn Home() -> impl IntoView {
    info!("rendering <Home/>");

    on_cleanup(move || {
        info!("cleaning up <Home/>");
    });

    view! {
        <div class="text-center mb-8">
            <h1 class="text-5xl font-bold text-green-800 mb-4">"Vault anytime," <br /> "anywhere."</h1>
            <div class="text-lg text-green-600 max-w-md space-y-2">
                <p>"One-click permissionless sophisticated trading"</p>
                <p>"The safest onchain vault"</p>
            </div>
        </div>
        <VaultPanel />
    }
}
