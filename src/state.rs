use std::sync::Arc;

use shelf_client::ApiClient;
use shelf_kernel::settings::{Settings, UiSettings};

use crate::views::ImagePolicy;

/// Shared by every handler. Cloning is cheap; nothing in here is mutable.
#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
    pub ui: Arc<UiSettings>,
    pub images: Arc<ImagePolicy>,
}

impl AppState {
    pub fn new(client: ApiClient, settings: &Settings) -> Self {
        Self {
            client,
            ui: Arc::new(settings.ui.clone()),
            images: Arc::new(ImagePolicy::from(&settings.images)),
        }
    }
}
