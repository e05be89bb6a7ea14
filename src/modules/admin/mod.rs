//! Inventory console: add, edit, delete and restock books.

mod form;
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

pub struct AdminModule {
    state: AppState,
}

impl AdminModule {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Module for AdminModule {
    fn name(&self) -> &'static str {
        "admin"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "admin module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/admin", get(routes::index))
            .route(
                "/admin/books",
                get(routes::list_books).post(routes::create_book),
            )
            .route("/admin/books/new", get(routes::new_book))
            .route("/admin/books/{id}", post(routes::update_book))
            .route("/admin/books/{id}/edit", get(routes::edit_book))
            .route(
                "/admin/books/{id}/delete",
                get(routes::confirm_delete).post(routes::delete_book),
            )
            .route("/admin/books/{id}/stock", post(routes::update_stock))
            .with_state(self.state.clone())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "admin module stopped");
        Ok(())
    }
}

pub fn create_module(state: AppState) -> Arc<dyn Module> {
    Arc::new(AdminModule::new(state))
}
