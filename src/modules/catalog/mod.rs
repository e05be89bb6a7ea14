//! Customer-facing catalog: browse, search, sort, view and buy books.

mod pages;
mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    routing::{get, post},
    Router,
};
use shelf_kernel::{InitCtx, Module};

use crate::state::AppState;

pub struct CatalogModule {
    state: AppState,
}

impl CatalogModule {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Module for CatalogModule {
    fn name(&self) -> &'static str {
        "catalog"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            api = %self.state.client.base_url(),
            page_size = self.state.ui.page_size,
            "catalog module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(routes::index))
            .route("/books", get(routes::list_books))
            .route("/books/{id}", get(routes::show_book))
            .route("/books/{id}/sell", post(routes::sell_book))
            .with_state(self.state.clone())
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "catalog module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "catalog module stopped");
        Ok(())
    }
}

pub fn create_module(state: AppState) -> Arc<dyn Module> {
    Arc::new(CatalogModule::new(state))
}
