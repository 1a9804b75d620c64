//! Link repository bot entry point
//!
//! Run with:
//! ```bash
//! cargo run -p linkrepo-bot
//! ```
//!
//! Configuration is loaded from environment variables.

use linkrepo_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.bot.port,
        trigger = %config.bot.trigger,
        "Configuration loaded"
    );

    if let Err(e) = linkrepo_bot::run(config).await {
        error!(error = %e, code = e.error_code(), "Bot failed");
        std::process::exit(1);
    }
}
