pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;
use fournil_core::Module;

use service::CatalogService;

/// Catalog module — products, suppliers, recipes and pricing.
pub struct CatalogModule {
    service: Arc<CatalogService>,
}

impl CatalogModule {
    pub fn new(service: CatalogService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Shared handle, for callers that aggregate across modules.
    pub fn service(&self) -> Arc<CatalogService> {
        self.service.clone()
    }
}

impl Module for CatalogModule {
    fn name(&self) -> &str {
        "catalog"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
