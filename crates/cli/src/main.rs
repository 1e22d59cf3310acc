//! Stockist CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! stockist migrate
//!
//! # Seed the database with a small fixture set
//! stockist seed
//!
//! # Mint a bearer token for the guarded API endpoints
//! stockist token --sub ops@example.com --ttl-mins 60
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed database with fixture merchants and products
//! - `token` - Mint an HS256 bearer token with `CLIENT_SECRET`

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "stockist")]
#[command(author, version, about = "Stockist CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the database with fixture merchants and products
    Seed,
    /// Mint a bearer token for the guarded API endpoints
    Token {
        /// Subject claim to embed in the token
        #[arg(short, long)]
        sub: String,

        /// Token lifetime in minutes; omit for a token that never expires
        #[arg(short, long)]
        ttl_mins: Option<u64>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::Token { sub, ttl_mins } => commands::token::mint(&sub, ttl_mins)?,
    }
    Ok(())
}
