mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod server;
mod state;

use config::Config;
use state::{AppState, RouteTable};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("hello-will starting");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    config.log_startup();

    let table = RouteTable::standard()?;
    for route in table.iter() {
        tracing::info!("  Route: {} {}", route.method, route.path);
    }

    let router = app::build_router(AppState::new(table), config.api_docs);
    let listener = server::bind(&config).await?;

    server::serve(listener, router).await
}
