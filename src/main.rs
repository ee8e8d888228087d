use leptos::prelude::*;
use tracing_subscriber::fmt;
use tracing_subscriber_wasm::MakeConsoleWriter;
use turtles_on_chain::App;

fn main() {
    console_error_panic_hook::set_once();

    fmt()
        .with_writer(
            // trace events would otherwise print a JS backtrace in the console
            MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG),
        )
        .with_max_level(tracing::Level::DEBUG)
        // there is no system clock on wasm32-unknown-unknown
        .without_time()
        .with_ansi(false)
        .init();

    mount_to_body(App)
}
