pub mod key_storage;

pub use key_storage::{create_key_storage, KeyStorage};

use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result};
use secrecy::ExposeSecret;
use tracing::info;

/// Load the signing key for a network from key storage
pub async fn load_signer(key_storage: &dyn KeyStorage, network_name: &str) -> Result<PrivateKeySigner> {
    let secret = key_storage
        .get_key(network_name)
        .await
        .with_context(|| format!("Failed to retrieve key for network {}", network_name))?;

    let signer = secret
        .expose_secret()
        .trim()
        .parse::<PrivateKeySigner>()
        .context("Failed to parse private key as signer")?;

    info!(
        "Loaded wallet for network {} with address {}",
        network_name,
        signer.address()
    );

    Ok(signer)
}
