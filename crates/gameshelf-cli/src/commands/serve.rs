//! Start the GameShelf server.

use clap::Args;

use gameshelf_core::config::AppConfig;
use gameshelf_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }

    gameshelf_api::logging::init_logging(&config.logging);

    let database = super::open_database(&config).await?;

    if config.database.auto_migrate {
        tracing::info!("Running database migrations...");
        database.migrate().await?;
    }

    gameshelf_api::run_server(config, database).await
}
