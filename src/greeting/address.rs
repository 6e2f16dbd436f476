//! Deterministic derivation of the greeted account address.

use solana_sdk::pubkey::Pubkey;

use crate::error::GreetingError;

/// Derive the greeted account address for a `(base, seed, program)` triple.
///
/// Pure and deterministic: the same triple always yields the same address.
/// Seed content is not validated — empty or non-ASCII seeds are hashed
/// as-is — but seeds longer than the 32-byte cap of the derivation domain
/// are rejected by the hash function itself.
pub fn derive_greeting_address(
    base: &Pubkey,
    seed: &str,
    program_id: &Pubkey,
) -> Result<Pubkey, GreetingError> {
    Ok(Pubkey::create_with_seed(base, seed, program_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let base = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();

        let first = derive_greeting_address(&base, "hello", &program_id).unwrap();
        let second = derive_greeting_address(&base, "hello", &program_id).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_triples_yield_distinct_addresses() {
        let base = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();

        let hello = derive_greeting_address(&base, "hello", &program_id).unwrap();
        let other_seed = derive_greeting_address(&base, "goodbye", &program_id).unwrap();
        let other_base =
            derive_greeting_address(&Pubkey::new_unique(), "hello", &program_id).unwrap();
        let other_program =
            derive_greeting_address(&base, "hello", &Pubkey::new_unique()).unwrap();

        assert_ne!(hello, other_seed);
        assert_ne!(hello, other_base);
        assert_ne!(hello, other_program);
    }

    #[test]
    fn test_empty_seed_is_accepted() {
        let base = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        derive_greeting_address(&base, "", &program_id).unwrap();
    }

    #[test]
    fn test_overlong_seed_is_rejected() {
        let base = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let seed = "x".repeat(33);

        let err = derive_greeting_address(&base, &seed, &program_id).unwrap_err();
        assert!(matches!(err, GreetingError::Seed(_)));
    }
}
