use clap::Parser;
use rb_server::{AppState, ServerConfig, ServerError, ServerResult, load_config, router};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rb-server")]
#[command(about = "RepairBay - damaged ship systems and phase-change estimates over HTTP", long_about = None)]
struct Cli {
    /// Path to a YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Listen address, overrides the config file
    #[arg(long)]
    bind: Option<SocketAddr>,
    /// Initially damaged system (e.g. navigation, engines) or `random`
    #[arg(long)]
    damaged: Option<String>,
}

#[tokio::main]
async fn main() -> ServerResult<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    config.apply_overrides(cli.bind, cli.damaged.as_deref())?;

    // RUST_LOG wins over the configured level
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|e| ServerError::Config(format!("Invalid log_level: {}", e)))?,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = AppState::new(config.initial_damaged_system);
    let app = router(state, config.cors);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        cors = config.cors,
        damaged = ?config.initial_damaged_system,
        "rb-server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("rb-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
