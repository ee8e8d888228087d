use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router_macro::path;
use tracing::{debug, info};
use turtle_components::FloatingTurtles;
use turtle_core::{constants::APP_TITLE, VAULT};

mod routes;

use routes::home::Home;

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    debug!(
        "vault: {} ({} <-> {})",
        VAULT.name, VAULT.asset_token.symbol, VAULT.share_token.symbol
    );

    // wallets are out of scope for this page
    let connect = move |_: ev::MouseEvent| debug!("Connect pressed");

    view! {
        <Title text=APP_TITLE />
        <Router>
            <div class="min-h-screen relative overflow-hidden bg-gradient-to-br from-green-50 via-emerald-50 to-teal-50">
                <FloatingTurtles />
                <header class="relative z-10 flex items-center justify-between p-6 bg-white/80 backdrop-blur-sm border-b border-green-100">
                    <div class="flex items-center space-x-2">
                        <div class="text-2xl">"🐢"</div>
                        <span class="text-xl font-bold text-green-800">{APP_TITLE}</span>
                    </div>
                    <div class="flex items-center">
                        <button
                            on:click=connect
                            class="min-w-24 text-sm font-medium py-2 px-4 border-none rounded-md
                            bg-green-600 hover:bg-green-700 text-white"
                        >
                            "Connect"
                        </button>
                    </div>
                </header>
                <main class="relative z-10 flex flex-col items-center justify-center min-h-[calc(100vh-80px)] p-6">
                    <Routes fallback=|| "This page could not be found.">
                        <Route path=path!("/") view=Home />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
