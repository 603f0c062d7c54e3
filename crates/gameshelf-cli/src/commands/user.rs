//! User management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use gameshelf_auth::password::{PasswordHasher, PasswordValidator};
use gameshelf_core::config::AppConfig;
use gameshelf_core::error::AppError;
use gameshelf_entity::user::User;
use gameshelf_service::{RegisterUser, UserService};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users
    List,
    /// Create a user; the password is prompted for
    Create {
        /// Username
        username: String,
        /// Email address
        email: String,
        /// Profile text
        #[arg(long)]
        bio: Option<String>,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            email: u.email.clone(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let database = super::open_database(config).await?;
    let users = UserService::new(
        database.repositories().users,
        Arc::new(PasswordHasher::new()),
        Arc::new(PasswordValidator::new(&config.auth)),
    );

    match &args.command {
        UserCommand::List => {
            let rows: Vec<UserRow> = users.list().await?.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
        }
        UserCommand::Create {
            username,
            email,
            bio,
        } => {
            let password = dialoguer::Password::new()
                .with_prompt("Password")
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()
                .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

            let user = users
                .register(RegisterUser {
                    username: username.clone(),
                    email: email.clone(),
                    password,
                    bio: bio.clone(),
                    photo: None,
                })
                .await?;

            output::print_success(&format!("User '{}' created", user.username));
            output::print_kv("ID", &user.id.to_string());
            output::print_kv("Email", &user.email);
        }
    }

    database.close().await;
    Ok(())
}
