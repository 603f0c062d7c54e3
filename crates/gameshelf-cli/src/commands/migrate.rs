//! Database migration management commands.

use clap::{Args, Subcommand};

use gameshelf_core::config::{AppConfig, DatabaseBackend};
use gameshelf_core::error::AppError;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    if config.database.backend == DatabaseBackend::Memory {
        return Err(AppError::configuration(
            "Migrations need the postgres backend; the memory backend has no schema",
        ));
    }

    let database = super::open_database(config).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            database.migrate().await?;
            output::print_success("All migrations applied successfully.");
        }
    }

    database.close().await;
    Ok(())
}
