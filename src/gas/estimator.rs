use alloy::rpc::types::TransactionRequest;
use anyhow::Result;
use serde::Serialize;

use crate::config::models::GasConfig;
use crate::gas::utils;
use crate::network::TransferBackend;
use crate::utils::TransactionLogger;

/// Gas estimate for a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GasEstimate {
    /// What the node returned from `eth_estimateGas`
    pub estimated: u64,
    /// Gas limit to submit with, after the multiplier
    pub gas_limit: u64,
}

/// Asks the node for a gas estimate and derives the limit to submit with
pub struct GasEstimator<'a, B: TransferBackend + ?Sized> {
    backend: &'a B,
    gas_config: &'a GasConfig,
}

impl<'a, B: TransferBackend + ?Sized> GasEstimator<'a, B> {
    pub fn new(backend: &'a B, gas_config: &'a GasConfig) -> Self {
        Self {
            backend,
            gas_config,
        }
    }

    /// Estimate gas for a transaction.
    ///
    /// Failures are returned as-is: there is no fallback limit, since the
    /// estimate itself is what is under test.
    pub async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<GasEstimate> {
        let estimated = self.backend.estimate_gas(tx).await?;
        let multiplier = self.gas_config.gas_multiplier;
        let gas_limit = utils::apply_gas_multiplier(estimated, multiplier);

        TransactionLogger::log_gas_estimation(estimated, gas_limit, multiplier);

        Ok(GasEstimate {
            estimated,
            gas_limit,
        })
    }
}
