//! Configuration module for environment variables and application settings

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

/// Greeting program deployed on devnet.
pub const DEFAULT_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("7btka46fnB7PPyTPD61SS5jWeN1uxhMSsAbGVbRSjxiK");

/// Seed used to derive the greeted account from the payer.
pub const DEFAULT_GREETING_SEED: &str = "hello";

#[derive(Debug, Clone)]
pub struct Config {
    /// Solana RPC endpoint URL
    pub rpc_url: String,

    /// Commitment level for queries and transaction confirmation
    pub commitment: CommitmentConfig,

    /// Address of the greeting program
    pub program_id: Pubkey,

    /// Seed string for the greeted account derivation
    pub seed: String,

    /// Path to the payer keypair file (Solana CLI JSON format)
    pub keypair_path: PathBuf,

    /// Base58-encoded payer secret key, takes precedence over the file
    pub payer_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let commitment = env::var("SOLANA_COMMITMENT").unwrap_or_else(|_| "confirmed".to_string());

        Ok(Self {
            rpc_url: env::var("SOLANA_RPC_URL")
                .unwrap_or_else(|_| "https://api.devnet.solana.com".to_string()),

            commitment: CommitmentConfig::from_str(&commitment)
                .with_context(|| format!("invalid SOLANA_COMMITMENT '{commitment}'"))?,

            program_id: match env::var("GREETING_PROGRAM_ID") {
                Ok(id) => Pubkey::from_str(&id)
                    .with_context(|| format!("invalid GREETING_PROGRAM_ID '{id}'"))?,
                Err(_) => DEFAULT_PROGRAM_ID,
            },

            seed: env::var("GREETING_SEED").unwrap_or_else(|_| DEFAULT_GREETING_SEED.to_string()),

            keypair_path: env::var("PAYER_KEYPAIR_PATH")
                .unwrap_or_else(|_| "id.json".to_string())
                .into(),

            payer_key: env::var("PAYER_PRIVATE_KEY").ok(),
        })
    }
}
