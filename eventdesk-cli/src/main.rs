//! eventdesk CLI - record management for event planning
//!
//! Entry point for the eventdesk command-line tool. Currently a single
//! `serve` subcommand that runs the HTTP API.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod serve;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "eventdesk",
    author,
    version,
    about = "Record-management service for event planning",
    long_about = "Stores events, contractor categories, contractors, and guests \
                  in PostgreSQL and serves JSON CRUD endpoints over each resource."
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG if set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up DATABASE_URL and friends from a local .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(cli.debug)?;

    match cli.command {
        Commands::Serve(args) => serve::run_serve(args).await,
    }
}
