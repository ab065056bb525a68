//! Docx Compliance Server
//!
//! Upload a Word document, get a formatting compliance report.

use anyhow::Context;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docx_compliance_server::app;
use docx_compliance_server::config::Config;
use docx_compliance_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "docx_compliance_server=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Starting Docx Compliance Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Upload staging directory: {}", config.upload.dir.display());
    tracing::info!(
        "External link timeout: {}s, max redirects: {}",
        config.link_check.timeout_secs,
        config.link_check.max_redirects
    );

    std::fs::create_dir_all(&config.upload.dir).with_context(|| {
        format!("Failed to create upload directory {}", config.upload.dir.display())
    })?;

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState::new(config).context("Failed to initialize application state")?;
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Docx Compliance Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
