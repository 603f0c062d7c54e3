//! Catalog seed command.

use clap::{Args, ValueEnum};

use gameshelf_core::config::AppConfig;
use gameshelf_core::error::AppError;
use gameshelf_database::seed::{self, SeedTarget};

use crate::output;

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// What to seed; lookups must exist before games
    #[arg(value_enum, default_value = "all")]
    pub target: SeedArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedArg {
    All,
    Genres,
    Platforms,
    Publishers,
    Developers,
    GameStatuses,
    Games,
}

impl From<SeedArg> for SeedTarget {
    fn from(arg: SeedArg) -> Self {
        match arg {
            SeedArg::All => Self::All,
            SeedArg::Genres => Self::Genres,
            SeedArg::Platforms => Self::Platforms,
            SeedArg::Publishers => Self::Publishers,
            SeedArg::Developers => Self::Developers,
            SeedArg::GameStatuses => Self::GameStatuses,
            SeedArg::Games => Self::Games,
        }
    }
}

/// Execute the seed command. Existing rows are skipped.
pub async fn execute(args: &SeedArgs, config: &AppConfig) -> Result<(), AppError> {
    let database = super::open_database(config).await?;
    let report = seed::seed(&database.repositories(), args.target.into()).await?;
    database.close().await;

    output::print_success(&format!("Seeded {:?}: {}", args.target, report));
    Ok(())
}
