//! # Greeting Client
//!
//! Command-line client for the on-chain greeting counter program.
//!
//! ## Environment Setup
//! Copy `.env.example` to `.env` and configure:
//! ```bash
//! cp .env.example .env
//! # Edit .env with your RPC endpoint and keypair path
//! ```
//!
//! ## Running
//! ```bash
//! cargo run
//! ```
//!
//! Each run makes sure the greeted account exists (creating it on first
//! use), sends one greeting, and reports the counter before and after.

use anyhow::Result;
use solana_client::nonblocking::rpc_client::RpcClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeting_client::{Config, greeting, signer};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize the tracing subscriber for structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false) // Don't show module targets for cleaner output
                .compact(), // Use compact formatting
        )
        .init();

    tracing::info!(
        "🏁 Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;
    tracing::info!(
        "Cluster: {} ({:?})",
        config.rpc_url,
        config.commitment.commitment
    );
    tracing::info!("Greeting program: {}", config.program_id);

    let payer = signer::load_payer(&config)?;
    let rpc = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment);

    let counter = greeting::run(&rpc, &config.program_id, &payer, &config.seed).await?;
    tracing::info!("✅ Done, greeting counter is now {}", counter);

    Ok(())
}
