//! Shelf application library
//!
//! Server-rendered bookstore catalog and inventory console in front of the
//! books REST API. Feature areas live in [`modules`] and share one
//! [`AppState`].

pub mod listing;
pub mod modules;
pub mod state;
pub mod utils;
pub mod views;

use anyhow::Context;
use axum::Router;
use shelf_client::ApiClient;
use shelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

pub use state::AppState;

/// Registry holding the catalog, admin and sales modules.
pub fn build_registry(state: &AppState) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, state);
    registry
}

/// Shared state for `settings`, talking to the configured books API.
pub fn build_state(settings: &Settings) -> anyhow::Result<AppState> {
    let client = ApiClient::new(&settings.api.base_url)
        .with_context(|| format!("invalid books API url '{}'", settings.api.base_url))?;
    Ok(AppState::new(client, settings))
}

/// The complete HTTP application, without lifecycle hooks run.
pub fn build_app(settings: &Settings) -> anyhow::Result<Router> {
    let state = build_state(settings)?;
    let registry = build_registry(&state);
    Ok(shelf_http::build_router(&registry, settings))
}

/// Initialize and start every module, serve until Ctrl-C, then stop them.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let state = build_state(&settings)?;
    let registry = build_registry(&state);
    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    let served = shelf_http::start_server(&registry, &settings, shutdown_signal()).await;
    let stopped = registry.stop_all().await;
    served?;
    stopped
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => tracing::error!(error = %err, "failed to listen for shutdown signal"),
    }
}
