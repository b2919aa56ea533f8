//! Command implementations for the minicurso CLI

pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use minicurso_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use minicurso_server::PgPool;

pub use migrate::run_migrate;
pub use serve::run_serve;

/// Database connection arguments shared by every command
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL (overrides .env)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "MINICURSO_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Open the process-wide pool.
    pub async fn connect(&self) -> Result<PgPool> {
        let url = self
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        minicurso_server::create_pool_with_options(url, self.max_connections)
            .await
            .context("Failed to create database pool")
    }
}
