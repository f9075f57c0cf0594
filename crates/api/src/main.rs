use anyhow::Context;
use family_budget_api::app::build_app;
use family_budget_api::config::{Environment, ServerConfig};
use family_budget_api::state::AppState;
use family_budget_db::DatabaseConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEV_LOG_FILTER: &str =
    "family_budget_api=debug,family_budget_db=debug,tower_http=debug,sqlx=debug";
const PROD_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    init_tracing(Environment::from_env());

    if let Err(e) = run().await {
        tracing::error!(error = format!("{e:#}"), "Server failed");
        std::process::exit(1);
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing(environment: Environment) {
    let default_filter = if environment.is_production() {
        PROD_LOG_FILTER
    } else {
        DEV_LOG_FILTER
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // Exactly one of the two formatters is active.
    let (json, text) = if environment.is_production() {
        (Some(tracing_subscriber::fmt::layer().json()), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .init();
}

async fn run() -> anyhow::Result<()> {
    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    let db_config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    tracing::info!(
        addr = %config.socket_addr(),
        environment = %config.environment,
        "Loaded server configuration"
    );

    // --- Database ---
    let pool = family_budget_db::connect(&db_config)
        .await
        .context("Failed to connect to database")?;

    family_budget_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    let seeded = family_budget_db::seed_data(&pool)
        .await
        .context("Failed to seed database")?;
    tracing::info!(seeded, "Seed data checked");

    // --- Router ---
    let app = build_app(AppState { pool: pool.clone() });

    // --- Start server ---
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!(%addr, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for SIGINT or SIGTERM.
///
/// If a handler cannot be installed, that signal is ignored and the other
/// one still triggers shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
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
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
