//! # Greeting Flow Module
//!
//! Client-side flow against the on-chain greeting program:
//! - Deterministic address derivation for the greeted account
//! - Idempotent account provisioning (create once, then reuse)
//! - Greeting transaction building, signing and confirmation
//! - Reading back the greeting counter

pub mod address;
pub mod provision;
pub mod report;
pub mod submit;

pub use address::derive_greeting_address;
pub use provision::ensure_greeting_account;
pub use report::report_greetings;
pub use submit::send_greeting;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{pubkey::Pubkey, signature::Keypair};

use crate::error::GreetingError;

/// Run the full greeting flow once: make sure the greeted account exists,
/// report its counter, send one greeting, and report again.
///
/// All collaborators are injected so the flow can be driven from tests or
/// alternative entry points without side effects at load time. Returns the
/// counter observed after the greeting was confirmed.
pub async fn run(
    rpc: &RpcClient,
    program_id: &Pubkey,
    payer: &Keypair,
    seed: &str,
) -> Result<u32, GreetingError> {
    let greeted = ensure_greeting_account(rpc, program_id, payer, seed).await?;

    report_greetings(rpc, &greeted).await?;
    let signature = send_greeting(rpc, program_id, &greeted, payer).await?;
    tracing::info!("Greeting confirmed: {}", signature);

    report_greetings(rpc, &greeted).await
}
