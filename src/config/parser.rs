use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;
use validator::{Validate, ValidationError, ValidationErrors};

use super::models::ProbeConfig;
use crate::constants::gas::MIN_TRANSFER_GAS;

/// Errors that can occur during configuration parsing
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Configuration validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Other(String),
}

/// Provides default configuration file path, if a home directory exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".gas-probe").join("config.yaml"))
}

/// Loads and validates a probe configuration file
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<ProbeConfig, ConfigError> {
    let mut file = File::open(&config_path).map_err(ConfigError::FileError)?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(ConfigError::FileError)?;

    parse_config(&content)
}

/// Parses and validates a configuration from YAML text
pub fn parse_config(content: &str) -> Result<ProbeConfig, ConfigError> {
    // An empty document means "all defaults"
    let config: ProbeConfig = if content.trim().is_empty() {
        ProbeConfig::default()
    } else {
        serde_yaml::from_str(content).map_err(ConfigError::ParseError)?
    };

    validate_config(&config)?;

    Ok(config)
}

/// Validates a configuration, including checks the derive cannot express
pub fn validate_config(config: &ProbeConfig) -> Result<(), ConfigError> {
    config.validate().map_err(ConfigError::ValidationError)?;

    let mut errors = ValidationErrors::new();
    if config.transfer.hardcoded_gas_limit < MIN_TRANSFER_GAS {
        errors.add("hardcoded_gas_limit", ValidationError::new("range"));
    }

    // range checks let NaN through
    let gas = &config.network.gas_config;
    if !gas.gas_multiplier.is_finite() {
        errors.add("gas_multiplier", ValidationError::new("finite"));
    }
    let fees = [
        ("gas_price_gwei", gas.gas_price_gwei),
        ("max_fee_per_gas_gwei", gas.max_fee_per_gas_gwei),
        ("max_priority_fee_per_gas_gwei", gas.max_priority_fee_per_gas_gwei),
    ];
    for (field, fee) in fees {
        if fee.is_some_and(|fee| !fee.is_finite()) {
            errors.add(field, ValidationError::new("finite"));
        }
    }
    if !errors.errors().is_empty() {
        return Err(ConfigError::ValidationError(errors));
    }

    // EIP-1559 fees are overridden as a pair; the provider fills both otherwise
    match (gas.max_fee_per_gas_gwei, gas.max_priority_fee_per_gas_gwei) {
        (Some(max_fee), Some(priority_fee)) if priority_fee > max_fee => {
            return Err(ConfigError::Other(format!(
                "max_priority_fee_per_gas_gwei ({priority_fee}) exceeds max_fee_per_gas_gwei ({max_fee})"
            )));
        }
        (Some(_), None) | (None, Some(_)) => {
            return Err(ConfigError::Other(
                "max_fee_per_gas_gwei and max_priority_fee_per_gas_gwei must be set together"
                    .to_string(),
            ));
        }
        _ => {}
    }

    Ok(())
}

/// Resolves which configuration to use.
///
/// An explicit path must exist. Without one, the default path is used when
/// present and built-in defaults otherwise.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ProbeConfig, ConfigError> {
    if let Some(path) = explicit {
        info!("Using configuration file: {:?}", path);
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            info!("Using configuration file: {:?}", path);
            load_config(path)
        }
        _ => {
            info!("No configuration file found, using built-in defaults");
            Ok(ProbeConfig::default())
        }
    }
}
