use anyhow::Result;
use async_trait::async_trait;
use secrecy::SecretString;
use tracing::warn;

use super::KeyStorage;
use crate::constants::wallet::DEV_FUNDER_PRIVATE_KEY;

/// Hands out the pre-funded key of the local dev chain for every network
#[derive(Debug, Clone, Default)]
pub struct DevKeyStorage;

impl DevKeyStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl KeyStorage for DevKeyStorage {
    async fn get_key(&self, network: &str) -> Result<SecretString> {
        warn!(
            "Using the public dev funder key for network '{}'. Only point this at a local test node.",
            network
        );
        Ok(SecretString::from(DEV_FUNDER_PRIVATE_KEY.to_string()))
    }
}
