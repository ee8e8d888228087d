use leptos::prelude::*;
use turtle_core::Token;

/// A token badge on the left with caller-provided content (balance, estimate, ...) on the right.
#[component]
pub fn TokenRow(
    #[prop(into)] token: Signal<Token>,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center justify-between p-4 rounded-lg border border-solid {class}",
        )>
            <div class="flex items-center space-x-3">
                <div class="text-2xl">"🐢"</div>
                <div>
                    <div class="font-semibold">{move || token.with(|token| token.symbol.clone())}</div>
                    <div class="text-sm opacity-80">
                        {move || token.with(|token| token.name.clone())}
                    </div>
                </div>
            </div>
            {children()}
        </div>
    }
}
