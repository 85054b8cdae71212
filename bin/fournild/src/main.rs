//! `fournild` — the Fournil server binary.
//!
//! Usage:
//!   fournild [--data-dir <dir>] [--listen <addr>]
//!
//! Tables live as one CSV per entity under the data directory; missing
//! files are created from the built-in demo rows on first run.

mod routes;

use clap::Parser;
use tracing::info;

use fournil_catalog::{CatalogModule, service::CatalogService};
use fournil_core::{Module, ServiceConfig};
use fournil_planning::{PlanningModule, service::PlanningService};
use fournil_store::TableStore;

/// Fournil server.
#[derive(Parser, Debug)]
#[command(name = "fournild", about = "Fournil server")]
struct Cli {
    /// Directory holding the CSV tables.
    #[arg(long = "data-dir", default_value = "data")]
    data_dir: String,

    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ServiceConfig::new(&cli.data_dir, &cli.listen);
    info!("data directory: {}", config.data_dir().display());

    let store = TableStore::open(config.data_dir())
        .map_err(|e| anyhow::anyhow!("failed to open data directory: {e}"))?;

    let catalog = CatalogModule::new(CatalogService::new(store.clone()));
    info!("catalog module initialized");

    let planning = PlanningModule::new(PlanningService::new(store));
    info!("planning module initialized");

    let state = routes::AppState {
        catalog: catalog.service(),
    };
    let module_routes = vec![
        (catalog.name(), catalog.routes()),
        (planning.name(), planning.routes()),
    ];
    let app = routes::build_router(state, module_routes);

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!("listening on {}", config.listen);
    axum::serve(listener, app).await?;
    Ok(())
}
