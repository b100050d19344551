//! Para Po! - Rust Implementation
//!
//! Serves the Dioxus fullstack app (server feature) or boots the WASM client (web feature).

use para_po::app::App;

#[cfg(feature = "server")]
fn main() {
    use axum::routing::get;
    use para_po::{api, config};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "para_po=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Para Po! (Rust)");

    // Load configuration; a broken file should not keep the UI down
    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid configuration, using defaults");
            config::Config::default()
        }
    };
    tracing::info!(?config, "Configuration loaded");
    config::init(config);

    dioxus::serve(|| async move {
        Ok(dioxus::server::router(App)
            .route("/status", get(api::status_handler))
            .layer(TraceLayer::new_for_http()))
    });
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
