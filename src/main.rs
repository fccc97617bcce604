//! Mini window launcher
//!
//! Hosts the input bar inside the mini window home page.

use mini_input_bar::app::App;

// Native (desktop) entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use mini_input_bar::shared::constants::CONFIG_PATH_ENV;
    use mini_input_bar::InputBarConfig;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting mini window...");

    let config = InputBarConfig::load_from_env(CONFIG_PATH_ENV);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&"[WASM] Mini window - WASM initialized!".into());
    dioxus::launch(App);
}
