//! HTTP server command for the biblio book API
//!
//! Opens (or creates) the database file, applies the schema, then serves
//! requests until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use biblio_server::db::{create_pool, run_migrations};
use biblio_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Path to the SQLite database file (created if missing)
    #[arg(long, env = "BIBLIO_DB", default_value = "books.db")]
    pub db: PathBuf,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting biblio server on {}", args.bind);

    // Create database pool
    let pool = create_pool(&args.db)
        .await
        .with_context(|| format!("Failed to open database at {}", args.db.display()))?;

    // Apply schema before accepting any request
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    // Configure server
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
