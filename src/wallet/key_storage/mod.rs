use anyhow::Result;
use async_trait::async_trait;
use secrecy::SecretString;

pub mod dev;
pub mod env;

pub use dev::DevKeyStorage;
pub use env::EnvVarStorage;

use crate::config::models::KeyStorageConfig;

#[async_trait]
pub trait KeyStorage: Send + Sync {
    async fn get_key(&self, network: &str) -> Result<SecretString>;
}

/// Create the key storage selected by the configuration
pub fn create_key_storage(config: &KeyStorageConfig) -> Result<Box<dyn KeyStorage>> {
    match config.storage_type.as_str() {
        "dev" => Ok(Box::new(DevKeyStorage::new())),
        "env" => Ok(Box::new(EnvVarStorage::new())),
        other => Err(anyhow::anyhow!("Unknown key storage type: {}", other)),
    }
}
