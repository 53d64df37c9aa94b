//! moodhue-api - HTTP service turning text sentiment into color palettes

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use moodhue_api::translate::Translator;
use moodhue_api::{build_router, AppState};
use moodhue_common::config::{RootFolderInitializer, RootFolderResolver};
use moodhue_common::db::init_database;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for moodhue-api
#[derive(Parser, Debug)]
#[command(name = "moodhue-api")]
#[command(about = "Text sentiment to color palette service")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "MOODHUE_PORT")]
    port: Option<u16>,

    /// Address to bind (overrides config file)
    #[arg(short, long, env = "MOODHUE_BIND")]
    bind: Option<String>,

    /// Root folder holding the palette database
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// Translation service base URL; enables translation
    #[arg(long, env = "MOODHUE_TRANSLATOR_ENDPOINT")]
    translator_endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let resolver = RootFolderResolver::new("moodhue-api").with_cli_override(args.root_folder.clone());
    let mut config = resolver.load_toml_config();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("moodhue_api={0},moodhue_common={0},tower_http=info", config.logging.level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting moodhue-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let root_folder = resolver.resolve();
    let initializer = RootFolderInitializer::new(root_folder);
    initializer
        .ensure_directory_exists()
        .context("Failed to create root folder")?;

    let db_path = initializer.database_path();
    info!("Database path: {}", db_path.display());
    let pool = init_database(&db_path)
        .await
        .context("Failed to initialize database")?;

    if let Some(endpoint) = args.translator_endpoint {
        config.translator.enabled = true;
        config.translator.endpoint = endpoint;
    }
    let translator = match Translator::from_config(&config.translator) {
        Ok(translator) => translator,
        Err(e) => {
            warn!("Translation disabled: {}", e);
            Translator::Disabled
        }
    };
    match &translator {
        Translator::Disabled => info!("Translation disabled"),
        Translator::Http(_) => info!("Translation via {}", config.translator.endpoint),
    }

    let app = build_router(AppState::new(pool, translator));

    let port = args.port.unwrap_or(config.port);
    let bind = args.bind.unwrap_or(config.bind_address);
    let ip: IpAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", bind))?;
    let addr = SocketAddr::new(ip, port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("moodhue-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
