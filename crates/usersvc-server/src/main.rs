//! User Service
//!
//! HTTP front for the user store. The storage backend is picked from the
//! configuration file at startup.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use usersvc_core::{LogEventSink, StoreFactory};
use usersvc_server::{config::DEFAULT_CONFIG_PATH, router, AppState, ServiceConfig};

#[derive(Debug, Parser)]
#[command(name = "usersvc-server", version, about = "User CRUD and search service")]
struct Cli {
    /// Path of the configuration json file
    #[arg(long, env = "USERSVC_CONF", default_value = DEFAULT_CONFIG_PATH)]
    conf: PathBuf,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let cli = Cli::parse();

    info!("Starting User Service v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server(cli).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(cli: Cli) -> Result<()> {
    let config = ServiceConfig::load(&cli.conf).context("Failed to load configuration")?;
    info!(
        "Config loaded: endpoint={}, database_type={}, amqp_broker={}",
        config.endpoint, config.database_type, config.amqp_broker
    );

    let factory = StoreFactory::with_defaults(Arc::new(LogEventSink));
    let store = factory
        .construct(&config.database_type, &config.connection)
        .with_context(|| {
            format!(
                "Failed to initialize storage backend (available: {})",
                factory.backends().join(", ")
            )
        })?;
    info!("Storage backend {} ready", config.database_type);

    let app = router(AppState::new(store));

    let addr: SocketAddr = tokio::net::lookup_host(&config.endpoint)
        .await
        .with_context(|| format!("Failed to resolve endpoint {}", config.endpoint))?
        .next()
        .with_context(|| format!("Endpoint {} resolved to no address", config.endpoint))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
