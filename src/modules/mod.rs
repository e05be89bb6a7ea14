pub mod admin;
pub mod catalog;
pub mod sales;

use shelf_client::ClientError;
use shelf_http::error::AppError;
use shelf_kernel::ModuleRegistry;

use crate::state::AppState;

/// Register every feature module with the registry, in mount order.
pub fn register_all(registry: &mut ModuleRegistry, state: &AppState) {
    registry.register(catalog::create_module(state.clone()));
    registry.register(admin::create_module(state.clone()));
    registry.register(sales::create_module(state.clone()));
}

/// Failure to load the single book a page is about.
pub(crate) fn book_load_error(err: ClientError) -> AppError {
    if err.is_not_found() {
        AppError::not_found(format!("Book not found. {err}"))
    } else {
        AppError::upstream(err.status(), err.to_string())
    }
}
