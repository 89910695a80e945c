use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use api::config::AppConfig;
use api::cors::cors_layer;
use api::create_app;
use api::state::AppState;
use shared::catalog::GameCatalog;
use shared::repositories::dynamodb_client;
use shared::repositories::status_check_repository::DynamoDbStatusCheckRepository;
use shared::services::status_check_service::StatusCheckService;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = AppConfig::from_env()?;

    // Set up services
    let client = dynamodb_client(config.database_url.as_deref()).await;
    let status_check_repository = Arc::new(DynamoDbStatusCheckRepository::new(
        client,
        config.status_checks_table.clone(),
    ));
    let status_check_service = Arc::new(StatusCheckService::new(status_check_repository));
    let game_catalog = Arc::new(GameCatalog::new());
    info!(
        "Loaded {} games, database {} stores status checks in table {}",
        game_catalog.list_games().len(),
        config.db_name,
        config.status_checks_table
    );

    let app_state = AppState {
        status_check_service,
        game_catalog,
    };

    info!("Allowed origins: {:?}", config.cors_origins);
    let app = create_app(app_state, cors_layer(&config.cors_origins));

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router, and with it the store client, is dropped once serve returns.
    info!("Server stopped, store client released");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
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
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
