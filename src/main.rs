//! GameShelf server: loads configuration, opens the store, and serves the API.

use gameshelf_core::config::AppConfig;
use gameshelf_core::error::AppError;
use gameshelf_database::Database;

#[tokio::main]
async fn main() {
    let env = std::env::var("GAMESHELF_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    gameshelf_api::logging::init_logging(&config.logging);
    tracing::info!(env = %env, "Starting GameShelf v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    let database = Database::connect(&config.database).await?;

    if config.database.auto_migrate {
        tracing::info!("Running database migrations...");
        database.migrate().await?;
    }

    gameshelf_api::run_server(config, database).await
}
