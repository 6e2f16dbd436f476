//! Reading back the greeting counter.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use tracing::info;

use crate::error::GreetingError;
use crate::state;

/// Fetch and decode the greeting counter at `greeted`.
///
/// Fails with [`GreetingError::AccountNotFound`] if no account exists at
/// the address, and with [`GreetingError::SchemaMismatch`] if the account
/// exists but does not hold a 4-byte greeting record — usually a sign of
/// a wrong address or a different program owning it.
pub async fn report_greetings(rpc: &RpcClient, greeted: &Pubkey) -> Result<u32, GreetingError> {
    let account = rpc
        .get_account_with_commitment(greeted, rpc.commitment())
        .await?
        .value
        .ok_or(GreetingError::AccountNotFound(*greeted))?;

    let greeting = state::decode(&account.data)?;
    info!("{} has been greeted {} time(s)", greeted, greeting.counter);
    Ok(greeting.counter)
}
