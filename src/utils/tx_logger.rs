use alloy::primitives::{Address, TxHash, U256};
use tracing::{debug, error, info, warn};

use crate::gas::utils::format_wei;

/// Standard transaction logging utilities
pub struct TransactionLogger;

impl TransactionLogger {
    /// Log the funder's balance
    pub fn log_balance(network: &str, funder: Address, balance: U256) {
        info!(
            "Got funds on {}: {} has {} ({} wei)",
            network,
            funder,
            format_wei(balance),
            balance
        );
    }

    /// Log the node's gas estimate and the limit derived from it
    pub fn log_gas_estimation(estimated_gas: u64, gas_limit: u64, multiplier: f64) {
        info!(
            "Got expected gas: {} units (limit: {}, multiplier: {:.2}x)",
            estimated_gas, gas_limit, multiplier
        );
    }

    /// Log transaction submission
    pub fn log_submission(attempt: &str, to: Address, value: U256, gas_limit: u64) {
        info!(
            "Sending {} attempt: {} to {} with gas limit {}",
            attempt,
            format_wei(value),
            to,
            gas_limit
        );
    }

    /// Log a hash once the node accepted the transaction
    pub fn log_pending(tx_hash: TxHash) {
        debug!("Transaction submitted: 0x{:x}, waiting for receipt", tx_hash);
    }

    /// Log transaction confirmation
    pub fn log_confirmation(attempt: &str, tx_hash: TxHash, gas_used: u128, gas_limit: u64) {
        info!(
            "{} attempt works with gas limit {}. Tx hash: 0x{:x}, Gas used: {}",
            attempt, gas_limit, tx_hash, gas_used
        );
    }

    /// Log a transaction that was mined but reverted
    pub fn log_revert(attempt: &str, tx_hash: TxHash, gas_used: u128, gas_limit: u64) {
        warn!(
            "{} attempt reverted with gas limit {}. Tx hash: 0x{:x}, Gas used: {}",
            attempt, gas_limit, tx_hash, gas_used
        );
    }

    /// Log transaction failure
    pub fn log_failure(attempt: &str, gas_limit: u64, error: &str) {
        error!(
            "{} attempt doesn't work with gas limit {}: {}",
            attempt, gas_limit, error
        );
    }
}
