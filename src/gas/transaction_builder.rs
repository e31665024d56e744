//! Builder for the probe's value transfer
//!
//! Produces the request used for gas estimation and the requests actually
//! submitted, applying fee overrides from the network's gas configuration
//! according to its transaction type.

use crate::config::models::{GasConfig, Network as NetworkConfig};
use crate::gas::utils;
use alloy::{
    network::TransactionBuilder,
    primitives::{Address, U256},
    rpc::types::TransactionRequest,
};
use anyhow::Result;
use tracing::debug;

/// Transaction builder for a plain value transfer
#[derive(Debug, Clone)]
pub struct TransferTxBuilder<'a> {
    from: Address,
    to: Address,
    value: U256,
    network_config: &'a NetworkConfig,
    gas_limit: Option<u64>,
    node_gas_price: Option<u128>,
}

impl<'a> TransferTxBuilder<'a> {
    /// Create a new transfer builder
    pub fn new(from: Address, to: Address, value: U256, network_config: &'a NetworkConfig) -> Self {
        Self {
            from,
            to,
            value,
            network_config,
            gas_limit: None,
            node_gas_price: None,
        }
    }

    /// Set the gas limit
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    /// Gas price reported by the node, used for legacy transactions without an override
    pub fn with_node_gas_price(mut self, gas_price: u128) -> Self {
        self.node_gas_price = Some(gas_price);
        self
    }

    /// True when `build` needs the node's gas price: a legacy transaction
    /// without a configured price. The provider would otherwise fill
    /// EIP-1559 fees and send a type 2 transaction.
    pub fn needs_node_gas_price(&self) -> bool {
        self.is_legacy()
            && self.network_config.gas_config.gas_price_gwei.is_none()
            && self.node_gas_price.is_none()
    }

    fn is_legacy(&self) -> bool {
        self.network_config.transaction_type.eq_ignore_ascii_case("legacy")
    }

    /// Request used for `eth_estimateGas`: sender, recipient and value only
    pub fn build_for_estimate(&self) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.from)
            .with_to(self.to)
            .with_value(self.value)
    }

    /// Request to submit, with gas limit and any configured fees
    pub fn build(&self) -> Result<TransactionRequest> {
        let mut tx = self.build_for_estimate();

        if let Some(gas_limit) = self.gas_limit {
            tx.set_gas_limit(gas_limit);
            debug!("Set gas limit: {}", gas_limit);
        }

        self.apply_fee_overrides(&mut tx, &self.network_config.gas_config)?;

        Ok(tx)
    }

    /// Apply fee overrides. EIP-1559 fees that are not configured are filled
    /// by the provider; a legacy transaction always carries a gas price.
    fn apply_fee_overrides(&self, tx: &mut TransactionRequest, gas_config: &GasConfig) -> Result<()> {
        match self.network_config.transaction_type.to_lowercase().as_str() {
            "legacy" => {
                if let Some(gas_price) = gas_config.gas_price_gwei {
                    let gas_price_wei = utils::gwei_to_wei(gas_price);
                    tx.set_gas_price(gas_price_wei.to::<u128>());
                    debug!("Set legacy gas price: {} gwei", gas_price);
                } else if let Some(gas_price_wei) = self.node_gas_price {
                    tx.set_gas_price(gas_price_wei);
                    debug!("Set legacy gas price from node: {} wei", gas_price_wei);
                } else {
                    return Err(anyhow::anyhow!(
                        "Legacy transaction on network {} has no gas price",
                        self.network_config.name
                    ));
                }
            }
            "eip1559" => {
                if let (Some(max_fee), Some(priority_fee)) = (
                    gas_config.max_fee_per_gas_gwei,
                    gas_config.max_priority_fee_per_gas_gwei,
                ) {
                    tx.set_max_fee_per_gas(utils::gwei_to_wei(max_fee).to::<u128>());
                    tx.set_max_priority_fee_per_gas(utils::gwei_to_wei(priority_fee).to::<u128>());
                    debug!(
                        "Set EIP-1559 fees - max: {} gwei, priority: {} gwei",
                        max_fee, priority_fee
                    );
                }
            }
            _ => {
                return Err(anyhow::anyhow!(
                    "Unknown transaction type: {}",
                    self.network_config.transaction_type
                ));
            }
        }

        Ok(())
    }
}
