pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;
use fournil_core::Module;

use service::PlanningService;

/// Planning module — employee roster and weekly shift schedule.
pub struct PlanningModule {
    service: Arc<PlanningService>,
}

impl PlanningModule {
    pub fn new(service: PlanningService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Module for PlanningModule {
    fn name(&self) -> &str {
        "planning"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
