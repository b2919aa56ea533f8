//! HTTP server command
//!
//! Opens the pool, brings the schema up to date and serves the student API.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use minicurso_server::db::migrate;
use minicurso_server::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "MINICURSO_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Do not apply pending migrations on startup
    #[arg(long)]
    pub skip_migrations: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting minicurso server on {}", args.bind);

    let pool = args.db.connect().await?;

    if args.skip_migrations {
        tracing::info!("Skipping migrations");
    } else {
        migrate::run(&pool)
            .await
            .context("Failed to apply migrations")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
