//! Payer keypair loading.
//!
//! Credentials are loaded here and handed to the greeting flow as a
//! ready [`Keypair`] value; the flow itself never touches key material
//! on disk or in the environment.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use solana_sdk::signature::Keypair;

use crate::config::Config;

/// Load the payer keypair per the configuration.
///
/// A base58-encoded `PAYER_PRIVATE_KEY` takes precedence; otherwise the
/// keypair is read from the configured file in the Solana CLI JSON
/// byte-array format (`[12, 34, ...]`).
pub fn load_payer(config: &Config) -> Result<Keypair> {
    if let Some(encoded) = &config.payer_key {
        let bytes = bs58::decode(encoded)
            .into_vec()
            .context("PAYER_PRIVATE_KEY is not valid base58")?;
        return Keypair::from_bytes(&bytes).context("PAYER_PRIVATE_KEY is not a valid keypair");
    }
    read_keypair_file(&config.keypair_path)
}

fn read_keypair_file(path: &Path) -> Result<Keypair> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read keypair file {}", path.display()))?;
    let bytes: Vec<u8> = serde_json::from_str(&contents)
        .with_context(|| format!("keypair file {} is not a JSON byte array", path.display()))?;
    Keypair::from_bytes(&bytes)
        .map_err(|e| anyhow!("keypair file {} is not a valid keypair: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::Signer;

    #[test]
    fn test_read_keypair_file_roundtrip() {
        let keypair = Keypair::new();
        let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();

        let dir = std::env::temp_dir();
        let path = dir.join(format!("greeting-client-test-{}.json", keypair.pubkey()));
        fs::write(&path, json).unwrap();

        let loaded = read_keypair_file(&path).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_keypair_file_errors() {
        let err = read_keypair_file(Path::new("/nonexistent/id.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/id.json"));
    }
}
