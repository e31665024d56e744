use anyhow::{anyhow, Result};
use async_trait::async_trait;
use secrecy::SecretString;
use std::env;
use tracing::{debug, warn};

use super::KeyStorage;
use crate::constants::wallet::{GENERIC_PRIVATE_KEY_ENV, PRIVATE_KEY_ENV_PREFIX};

#[derive(Debug, Clone)]
pub struct EnvVarStorage;

impl EnvVarStorage {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn get_env_var_name(network: &str) -> String {
        format!(
            "{}{}",
            PRIVATE_KEY_ENV_PREFIX,
            network.to_uppercase().replace('-', "_")
        )
    }
}

impl Default for EnvVarStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyStorage for EnvVarStorage {
    async fn get_key(&self, network: &str) -> Result<SecretString> {
        let env_var = Self::get_env_var_name(network);
        debug!(
            "Looking for private key in environment variable: {}",
            env_var
        );

        if let Ok(key) = env::var(&env_var) {
            return Ok(SecretString::from(key));
        }

        if let Ok(key) = env::var(GENERIC_PRIVATE_KEY_ENV) {
            warn!(
                "Using private key from generic '{}' environment variable. \
                Set '{}' to scope it to this network.",
                GENERIC_PRIVATE_KEY_ENV, env_var
            );
            return Ok(SecretString::from(key));
        }

        Err(anyhow!(
            "Private key not found. Looked for '{}' and '{}' environment variables",
            env_var,
            GENERIC_PRIVATE_KEY_ENV
        ))
    }
}
