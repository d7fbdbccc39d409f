//! Claim Intake - API Server Binary
//!
//! This binary starts the HTTP API server for the claim intake workflow.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claim-intake-api
//!
//! # Run with environment variables
//! INTAKE_PORT=9000 INTAKE_RNG_SEED=42 cargo run --bin claim-intake-api
//! ```
//!
//! # Environment Variables
//!
//! * `INTAKE_HOST` - Server host (default: 0.0.0.0)
//! * `INTAKE_PORT` - Server port (default: 8080)
//! * `INTAKE_POLICY_TABLE_PATH` - Policy table CSV (default: data/policies.csv)
//! * `INTAKE_MODEL_PATH` - ONNX classifier (default: models/resnet50.onnx)
//! * `INTAKE_LABELS_PATH` - Class labels (default: models/imagenet_classes.txt)
//! * `INTAKE_RNG_SEED` - Fixed seed for damage estimates (default: entropy)
//! * `INTAKE_MAX_UPLOAD_BYTES` - Request body limit (default: 10 MiB)
//! * `INTAKE_HISTORY_PATH` - Claim history CSV kept across restarts (default: none)
//! * `INTAKE_SESSION_TTL_MINUTES` - Lifetime of unfinished sessions (default: 60)
//! * `INTAKE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use domain_assessment::OnnxClassifier;
use interface_api::{config::ApiConfig, create_router, intake::ClaimIntake};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, the policy table and the image
/// classifier, and starts the HTTP server. Any startup failure is fatal.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid INTAKE_* configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Claim Intake API Server"
    );

    let policies = infra_store::load_policy_table(&config.policy_table_path)
        .with_context(|| format!("loading policy table {}", config.policy_table_path))?;

    let classifier = OnnxClassifier::load(&config.model_path, &config.labels_path)
        .context("loading image classifier")?;

    let intake = Arc::new(
        ClaimIntake::new(Arc::new(policies), Arc::new(classifier), config.rng_seed)
            .with_session_ttl(config.session_ttl()),
    );
    if let Some(path) = config.history_path.as_deref().filter(|p| Path::new(p).exists()) {
        intake
            .load_history(path)
            .with_context(|| format!("restoring claim history {path}"))?;
    }
    tokio::spawn(evict_sessions_periodically(intake.clone()));
    let app = create_router(intake.clone(), config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(path) = &config.history_path {
        intake
            .save_history(path)
            .with_context(|| format!("saving claim history {path}"))?;
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Drops abandoned wizard sessions once a minute
async fn evict_sessions_periodically(intake: Arc<ClaimIntake>) {
    let mut interval = tokio::time::interval(Duration::from_secs(60));
    loop {
        interval.tick().await;
        intake.evict_expired_sessions(chrono::Utc::now());
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
