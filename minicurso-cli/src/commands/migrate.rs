//! Schema migration command

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use minicurso_server::db::migrate;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub command: MigrateCommands,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

#[derive(Subcommand, Debug)]
pub enum MigrateCommands {
    /// Apply pending migrations
    Up,
    /// Revert all migrations, dropping the students, courses and enrollments tables
    Down,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.db.connect().await?;

    match args.command {
        MigrateCommands::Up => migrate::run(&pool)
            .await
            .context("Failed to apply migrations")?,
        MigrateCommands::Down => migrate::revert(&pool)
            .await
            .context("Failed to revert migrations")?,
    }

    pool.close().await;
    Ok(())
}
