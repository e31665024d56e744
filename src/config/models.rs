use alloy::primitives::{utils::parse_ether, Address, U256};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants;

/// The main configuration structure for a probe run
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProbeConfig {
    /// Node the probe talks to
    #[serde(default)]
    #[validate]
    pub network: Network,

    /// The transfer that is sent on each attempt
    #[serde(default)]
    #[validate]
    pub transfer: TransferConfig,

    /// Where the funder key comes from
    #[serde(default)]
    #[validate]
    pub key_storage: KeyStorageConfig,
}

/// Configuration for key storage
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct KeyStorageConfig {
    /// Storage type: "dev" or "env" (default: "dev", the local test wallet)
    #[serde(default = "default_key_storage_type")]
    #[validate(custom = "validate_key_storage_type")]
    pub storage_type: String,
}

impl Default for KeyStorageConfig {
    fn default() -> Self {
        Self {
            storage_type: default_key_storage_type(),
        }
    }
}

fn default_key_storage_type() -> String {
    "dev".to_string()
}

fn validate_key_storage_type(storage_type: &str) -> Result<(), ValidationError> {
    match storage_type {
        "dev" | "env" => Ok(()),
        _ => Err(ValidationError::new("storage_type must be 'dev' or 'env'")),
    }
}

/// Configuration for a blockchain network
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Network {
    /// Network name, also used to look up keys
    #[validate(length(min = 1))]
    #[serde(default = "default_network_name")]
    pub name: String,

    /// RPC URL for the network
    #[validate(url)]
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Transaction type to use ("legacy" or "eip1559")
    #[serde(default = "default_transaction_type")]
    #[validate(custom = "validate_transaction_type")]
    pub transaction_type: String,

    /// Gas configuration for this network
    #[serde(default)]
    #[validate]
    pub gas_config: GasConfig,
}

impl Default for Network {
    fn default() -> Self {
        Self {
            name: default_network_name(),
            rpc_url: default_rpc_url(),
            transaction_type: default_transaction_type(),
            gas_config: GasConfig::default(),
        }
    }
}

/// Gas configuration for a network
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GasConfig {
    /// For legacy transactions: gas price in gwei (left to the node if not provided)
    #[validate(range(min = 0.0))]
    pub gas_price_gwei: Option<f64>,

    /// For EIP-1559: max fee per gas in gwei (left to the node if not provided)
    #[validate(range(min = 0.0))]
    pub max_fee_per_gas_gwei: Option<f64>,

    /// For EIP-1559: max priority fee per gas in gwei (left to the node if not provided)
    #[validate(range(min = 0.0))]
    pub max_priority_fee_per_gas_gwei: Option<f64>,

    /// Multiplier applied to the node's gas estimate (default: 1.0, the raw estimate)
    #[serde(default = "default_gas_multiplier")]
    #[validate(range(min = 1.0, max = 5.0))]
    pub gas_multiplier: f64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            gas_price_gwei: None,
            max_fee_per_gas_gwei: None,
            max_priority_fee_per_gas_gwei: None,
            gas_multiplier: default_gas_multiplier(),
        }
    }
}

/// The transfer sent by each attempt
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransferConfig {
    /// Recipient address
    #[serde(default = "default_recipient")]
    #[validate(custom = "validate_eth_address")]
    pub recipient: String,

    /// Amount in ether, as a decimal string (e.g. "1", "0.25")
    #[serde(default = "default_value_ether")]
    #[validate(custom = "validate_ether_amount")]
    pub value_ether: String,

    /// Gas limit of the hardcoded attempt
    /// (at least the intrinsic gas of a transfer, checked by `validate_config`)
    #[serde(default = "default_hardcoded_gas_limit")]
    pub hardcoded_gas_limit: u64,

    /// How long to wait for each receipt (in seconds)
    #[serde(default = "default_receipt_timeout")]
    #[validate(range(min = 1, max = 3600))]
    pub receipt_timeout_seconds: u64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            recipient: default_recipient(),
            value_ether: default_value_ether(),
            hardcoded_gas_limit: default_hardcoded_gas_limit(),
            receipt_timeout_seconds: default_receipt_timeout(),
        }
    }
}

impl TransferConfig {
    /// Recipient as an address
    pub fn recipient_address(&self) -> Result<Address> {
        self.recipient
            .parse()
            .with_context(|| format!("Invalid recipient address: {}", self.recipient))
    }

    /// Transfer value in wei
    pub fn value_wei(&self) -> Result<U256> {
        parse_ether(&self.value_ether)
            .with_context(|| format!("Invalid ether amount: {}", self.value_ether))
    }
}

fn default_network_name() -> String {
    constants::probe::DEFAULT_NETWORK_NAME.to_string()
}

fn default_rpc_url() -> String {
    constants::probe::DEFAULT_RPC_URL.to_string()
}

fn default_transaction_type() -> String {
    "eip1559".to_string()
}

fn default_gas_multiplier() -> f64 {
    constants::gas::DEFAULT_GAS_MULTIPLIER
}

fn default_recipient() -> String {
    constants::probe::DEFAULT_RECIPIENT.to_string()
}

fn default_value_ether() -> String {
    constants::probe::DEFAULT_VALUE_ETHER.to_string()
}

fn default_hardcoded_gas_limit() -> u64 {
    constants::gas::DEFAULT_HARDCODED_GAS_LIMIT
}

fn default_receipt_timeout() -> u64 {
    constants::time::DEFAULT_RECEIPT_TIMEOUT_SECS
}

/// Validates that a string is a valid Ethereum address
fn validate_eth_address(address: &str) -> Result<(), ValidationError> {
    if !address.starts_with("0x")
        || address.len() != 42
        || !address[2..].chars().all(|c| c.is_ascii_hexdigit())
    {
        return Err(ValidationError::new("invalid_eth_address"));
    }
    Ok(())
}

fn validate_ether_amount(amount: &str) -> Result<(), ValidationError> {
    parse_ether(amount)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_ether_amount"))
}

/// Validates that transaction type is either "legacy" or "eip1559"
pub fn validate_transaction_type(tx_type: &str) -> Result<(), ValidationError> {
    match tx_type.to_lowercase().as_str() {
        "legacy" | "eip1559" => Ok(()),
        _ => Err(ValidationError::new("invalid_transaction_type")),
    }
}
