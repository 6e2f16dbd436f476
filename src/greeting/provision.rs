//! Idempotent provisioning of the greeted account.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction,
    transaction::Transaction,
};
use tracing::{debug, info};

use crate::error::GreetingError;
use crate::greeting::address::derive_greeting_address;
use crate::state::GREETING_SIZE;

/// Make sure the greeted account for `(payer, seed, program)` exists,
/// creating it exactly once.
///
/// If an account already sits at the derived address it is returned as-is;
/// its size and owning program are not re-validated. Otherwise a single
/// `create_account_with_seed` instruction is submitted with the payer as
/// both funder and base, funded to the rent-exemption minimum for the
/// 4-byte greeting record, and owned by the greeting program. The call
/// only returns after the creation is confirmed.
pub async fn ensure_greeting_account(
    rpc: &RpcClient,
    program_id: &Pubkey,
    payer: &Keypair,
    seed: &str,
) -> Result<Pubkey, GreetingError> {
    let payer_pubkey = payer.pubkey();
    let greeted = derive_greeting_address(&payer_pubkey, seed, program_id)?;

    let existing = rpc
        .get_account_with_commitment(&greeted, rpc.commitment())
        .await?
        .value;
    if existing.is_some() {
        debug!("Greeted account {} already exists", greeted);
        return Ok(greeted);
    }

    info!("Creating account {} to say hello to", greeted);
    let lamports = rpc
        .get_minimum_balance_for_rent_exemption(GREETING_SIZE)
        .await?;

    let instruction = system_instruction::create_account_with_seed(
        &payer_pubkey,
        &greeted,
        &payer_pubkey,
        seed,
        lamports,
        GREETING_SIZE as u64,
        program_id,
    );

    let recent_blockhash = rpc.get_latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer_pubkey),
        &[payer],
        recent_blockhash,
    );
    rpc.send_and_confirm_transaction(&transaction)
        .await
        .map_err(GreetingError::Confirmation)?;

    Ok(greeted)
}
