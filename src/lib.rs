//! # Greeting Client
//!
//! Client for the on-chain greeting counter program. Derives a
//! deterministic greeted account from the payer, provisions it exactly
//! once, sends a greeting instruction, and reads the counter back.
//!
//! ## Architecture
//! The crate is organized into modules:
//! - `config`: Environment variable configuration management
//! - `signer`: Payer keypair loading (JSON file or base58 env var)
//! - `state`: Fixed-layout codec for the greeting account record
//! - `error`: Error taxonomy for the greeting flow
//! - `greeting`: Address derivation, provisioning, submission, reporting,
//!   and the top-level [`greeting::run`] flow

pub mod config;
pub mod error;
pub mod greeting;
pub mod signer;
pub mod state;

pub use config::Config;
pub use error::GreetingError;
pub use state::{GREETING_SIZE, GreetingAccount};
