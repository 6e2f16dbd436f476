//! Error types for greeting account operations.

use solana_client::client_error::ClientError;
use solana_sdk::pubkey::{Pubkey, PubkeyError};
use thiserror::Error;

use crate::state::GREETING_SIZE;

/// Failures surfaced by the greeting flow.
///
/// Nothing here is recovered locally; every variant propagates to the
/// caller of the top-level flow unchanged. Query failures and
/// confirmation failures are kept apart so callers can tell whether a
/// transaction was ever submitted.
#[derive(Debug, Error)]
pub enum GreetingError {
    /// No account exists at the derived address at read time.
    #[error("cannot find the greeted account {0}")]
    AccountNotFound(Pubkey),

    /// Account data is not the fixed 4-byte greeting layout.
    #[error("greeting account data is {actual} bytes, expected {expected}")]
    SchemaMismatch { expected: usize, actual: usize },

    /// An RPC query (account info, rent exemption, blockhash) failed.
    #[error("ledger request failed: {0}")]
    Rpc(#[from] ClientError),

    /// A transaction was submitted but not confirmed.
    #[error("transaction was not confirmed: {0}")]
    Confirmation(ClientError),

    /// Seed exceeded the 32-byte cap of the derivation hash domain.
    #[error("invalid greeting seed: {0}")]
    Seed(#[from] PubkeyError),
}

impl GreetingError {
    pub(crate) fn schema_mismatch(actual: usize) -> Self {
        Self::SchemaMismatch {
            expected: GREETING_SIZE,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_details() {
        let pubkey = Pubkey::new_unique();
        let not_found = GreetingError::AccountNotFound(pubkey);
        assert!(not_found.to_string().contains(&pubkey.to_string()));

        let mismatch = GreetingError::schema_mismatch(7);
        assert_eq!(
            mismatch.to_string(),
            "greeting account data is 7 bytes, expected 4"
        );
    }
}
