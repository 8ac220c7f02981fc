#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    // Dioxus may already have installed its own subscriber.
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {}

fn main() {
    init_logging();
    // before the runtime spawns threads
    sova::types::local_offset();
    dioxus::launch(sova::ui::App);
}
