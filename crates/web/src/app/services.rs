use std::sync::Arc;

use shopfront_catalog::{InMemoryProductRepository, ProductRepository};

use crate::app::controller::ProductsController;

/// Shared application services handed to handlers via request extensions.
#[derive(Clone)]
pub struct AppServices {
    pub products: Arc<dyn ProductRepository>,
}

impl AppServices {
    pub fn products_controller(&self) -> ProductsController<Arc<dyn ProductRepository>> {
        ProductsController::new(self.products.clone())
    }
}

pub fn build_services() -> AppServices {
    AppServices {
        products: Arc::new(InMemoryProductRepository::new()),
    }
}
