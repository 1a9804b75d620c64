//! Webhook server setup
//!
//! Wires configuration, database, usecases and the messaging channel into an
//! axum application.

mod handlers;
mod middleware;
mod state;

pub use handlers::{HealthResponse, HttpError, ReadinessResponse, WebhookReply};
pub use middleware::REQUEST_ID_HEADER;
pub use state::BotState;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use linkrepo_common::{AppConfig, AppError};
use linkrepo_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::channel::HttpChannel;
use crate::dispatcher::Dispatcher;
use crate::listener::RepositoryListener;

/// Create the bot router
pub fn create_router() -> Router<BotState> {
    Router::new()
        .route("/webhook", post(handlers::webhook))
        .route("/health", get(handlers::health_check))
        .route("/health/ready", get(handlers::readiness_check))
}

/// Build the complete application
pub fn create_app(state: BotState) -> Router {
    middleware::apply_middleware(create_router()).with_state(state)
}

/// Initialize all dependencies and create `BotState`
pub async fn create_bot_state(config: &AppConfig) -> Result<BotState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = linkrepo_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = linkrepo_db::create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        linkrepo_db::run_migrations(&pool)
            .await
            .map_err(|e| AppError::Migration(e.to_string()))?;
    }

    let ctx = Arc::new(ServiceContext::postgres(pool.clone()));
    let dispatcher = Dispatcher::new(ctx, config.bot.trigger.clone());
    let channel = Arc::new(HttpChannel::new(config.bot.outbound_url.clone()));

    Ok(BotState::new(RepositoryListener::new(dispatcher), channel).with_pool(pool))
}

/// Run the webhook server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting bot server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Bot listening on http://{}/webhook", addr);

    axum::serve(listener, app)
        .await
        .map_err(AppError::internal)?;

    Ok(())
}

/// Run the complete bot server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.bot.address();

    let state = create_bot_state(&config).await?;

    let app = create_app(state);

    run_server(app, &addr).await
}
