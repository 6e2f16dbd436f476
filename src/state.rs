//! On-chain state for the greeting account.
//!
//! The greeting program stores a single record per account: a `u32`
//! counter of how many times the account has been greeted. The wire
//! layout is exactly 4 bytes, little endian, with no header or version
//! tag, so there is one static struct and a free encode/decode pair
//! instead of any runtime schema machinery.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::GreetingError;

/// Serialized size of [`GreetingAccount`] on chain.
pub const GREETING_SIZE: usize = 4;

/// State held by a greeting account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct GreetingAccount {
    /// Number of greetings the account has received.
    pub counter: u32,
}

/// Serialize a greeting record into its fixed 4-byte layout.
pub fn encode(state: &GreetingAccount) -> Vec<u8> {
    borsh::to_vec(state).expect("u32 serialization is infallible")
}

/// Deserialize a greeting record from raw account bytes.
///
/// The layout is fixed-size, so any buffer that is not exactly
/// [`GREETING_SIZE`] bytes is a schema mismatch, not a value to coerce.
pub fn decode(data: &[u8]) -> Result<GreetingAccount, GreetingError> {
    if data.len() != GREETING_SIZE {
        return Err(GreetingError::schema_mismatch(data.len()));
    }
    GreetingAccount::try_from_slice(data).map_err(|_| GreetingError::schema_mismatch(data.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_fixed_size_little_endian() {
        assert_eq!(encode(&GreetingAccount::default()), vec![0, 0, 0, 0]);
        assert_eq!(encode(&GreetingAccount { counter: 1 }), vec![1, 0, 0, 0]);
        assert_eq!(
            encode(&GreetingAccount { counter: 0x0403_0201 }),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_roundtrip() {
        for counter in [0, 1, 42, u32::MAX - 1, u32::MAX] {
            let state = GreetingAccount { counter };
            assert_eq!(decode(&encode(&state)).unwrap(), state);
        }
    }

    #[test]
    fn test_decode_rejects_wrong_lengths() {
        for len in [0usize, 1, 3, 5, 8] {
            let err = decode(&vec![0u8; len]).unwrap_err();
            match err {
                GreetingError::SchemaMismatch { expected, actual } => {
                    assert_eq!(expected, GREETING_SIZE);
                    assert_eq!(actual, len);
                }
                other => panic!("expected SchemaMismatch, got {other:?}"),
            }
        }
    }
}
