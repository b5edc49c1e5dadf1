//! tally CLI - invoicing dashboard server and database tooling
//!
//! Entry point for the `tally` binary:
//! - `serve` runs the HTTP API backing the dashboard
//! - `seed` bootstraps a development database with fixture data

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use tally_core::config::{load_dotenv, DatabaseConfig};
use tally_server::db;
use tally_server::ServerConfig;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    author,
    version,
    about = "Invoicing dashboard backend: HTTP API, queries, and form actions"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Create tables and insert development fixture data
    Seed,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Allow requests from any origin (development only)
    #[arg(long)]
    cors_permissive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;
    load_dotenv();

    let database_url =
        DatabaseConfig::url_from_env().context("database configuration missing")?;
    let pool = db::create_pool(&database_url)
        .await
        .context("failed to connect to database")?;

    match cli.command {
        Commands::Serve(args) => {
            db::migrations::run(&pool)
                .await
                .context("failed to run schema migrations")?;

            let config = ServerConfig {
                bind_addr: args.bind,
                cors_permissive: args.cors_permissive,
            };
            tally_server::run_server(pool, config)
                .await
                .context("server error")?;
        }
        Commands::Seed => {
            db::seed::run(&pool).await.context("seeding failed")?;
            info!("database seeded");
        }
    }

    Ok(())
}
