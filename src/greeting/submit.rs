//! Building, signing and confirming the greeting transaction.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use tracing::info;

use crate::error::GreetingError;

/// Send one greeting to the greeted account and wait for confirmation.
///
/// The instruction names the greeted account as writable and non-signing,
/// with an empty payload — the greeting program treats every instruction
/// as a greeting regardless of data. The payer signs and fee-pays the
/// enclosing transaction. Returns the confirmed transaction signature.
pub async fn send_greeting(
    rpc: &RpcClient,
    program_id: &Pubkey,
    greeted: &Pubkey,
    payer: &Keypair,
) -> Result<Signature, GreetingError> {
    info!("Saying hello to {}", greeted);

    let instruction = Instruction {
        program_id: *program_id,
        accounts: vec![AccountMeta::new(*greeted, false)],
        data: vec![],
    };

    let recent_blockhash = rpc.get_latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &[payer],
        recent_blockhash,
    );
    rpc.send_and_confirm_transaction(&transaction)
        .await
        .map_err(GreetingError::Confirmation)
}
