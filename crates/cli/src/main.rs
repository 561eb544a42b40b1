//! Shopcart CLI - Session data maintenance tools.
//!
//! # Usage
//!
//! ```bash
//! # Show the persisted session and product snapshot
//! shopcart-cli inspect
//!
//! # Delete the persisted records
//! shopcart-cli clear
//!
//! # Check whether a bearer token has expired
//! shopcart-cli token check <TOKEN>
//! ```
//!
//! # Commands
//!
//! - `inspect` - Summarize the records under the configured data directory
//! - `clear` - Delete the persisted session and product records
//! - `token check` - Decode a token's claims and report expiry

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shopcart-cli")]
#[command(author, version, about = "Shopcart session data tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the persisted session and product snapshot
    Inspect,
    /// Delete the persisted session and product records
    Clear,
    /// Bearer token utilities
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Decode a token's claims and report whether it has expired
    Check {
        /// Compact JWS token string
        token: String,
    },
}

fn main() {
    // Load .env if present, then initialize tracing
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Inspect => commands::inspect::run()?,
        Commands::Clear => commands::clear::run()?,
        Commands::Token { action } => match action {
            TokenAction::Check { token } => commands::token::check(&token),
        },
    }
    Ok(())
}
