//! Mock implementations for testing

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use alloy::{
    primitives::{address, Address, B256, U256},
    rpc::types::TransactionRequest,
};

use crate::network::{NetworkError, TransferBackend, TransferReceipt};

/// Configuration for controlling mock failures
#[derive(Debug, Clone, Default)]
pub struct FailureConfig {
    pub fail_on_chain_id: bool,
    pub fail_on_balance: bool,
    pub fail_on_estimate: bool,
    pub fail_on_gas_price: bool,
    /// Every mined transaction reverts
    pub revert_all: bool,
    /// Receipts never arrive
    pub timeout_all: bool,
}

impl FailureConfig {
    pub fn fail_on_operation(operation: &str) -> Self {
        match operation {
            "chain_id" => Self {
                fail_on_chain_id: true,
                ..Default::default()
            },
            "balance" => Self {
                fail_on_balance: true,
                ..Default::default()
            },
            "estimate" => Self {
                fail_on_estimate: true,
                ..Default::default()
            },
            "gas_price" => Self {
                fail_on_gas_price: true,
                ..Default::default()
            },
            "revert" => Self {
                revert_all: true,
                ..Default::default()
            },
            "timeout" => Self {
                timeout_all: true,
                ..Default::default()
            },
            _ => Self::default(),
        }
    }
}

/// In-memory node that accepts a transfer when its gas limit covers
/// `required_gas`, and estimates `estimate` for every request.
#[derive(Debug)]
pub struct MockTransferBackend {
    funder: Address,
    balance: U256,
    estimate: u64,
    required_gas: u64,
    gas_price: u128,
    failure_config: FailureConfig,
    sent: Arc<RwLock<Vec<TransactionRequest>>>,
}

impl MockTransferBackend {
    pub fn new() -> Self {
        Self {
            funder: address!("00000000000000000000000000000000000000f0"),
            balance: U256::from(10_000_000_000_000_000_000u128),
            estimate: 21_000,
            required_gas: 21_000,
            gas_price: 100_000_000,
            failure_config: FailureConfig::default(),
            sent: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn with_estimate(mut self, estimate: u64) -> Self {
        self.estimate = estimate;
        self
    }

    pub fn with_required_gas(mut self, required_gas: u64) -> Self {
        self.required_gas = required_gas;
        self
    }

    pub fn with_failures(mut self, failure_config: FailureConfig) -> Self {
        self.failure_config = failure_config;
        self
    }

    /// Gas limits of all submitted transactions, in order
    pub fn sent_gas_limits(&self) -> Vec<Option<u64>> {
        self.sent.read().unwrap().iter().map(|tx| tx.gas).collect()
    }

    /// Every submitted request, in order
    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.sent.read().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.read().unwrap().len()
    }
}

impl Default for MockTransferBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransferBackend for MockTransferBackend {
    fn funder(&self) -> Address {
        self.funder
    }

    async fn chain_id(&self) -> Result<u64> {
        if self.failure_config.fail_on_chain_id {
            return Err(anyhow!("Mock chain id failure"));
        }
        Ok(412346)
    }

    async fn balance(&self, _address: Address) -> Result<U256> {
        if self.failure_config.fail_on_balance {
            return Err(anyhow!("Mock balance failure"));
        }
        Ok(self.balance)
    }

    async fn estimate_gas(&self, _tx: &TransactionRequest) -> Result<u64> {
        if self.failure_config.fail_on_estimate {
            return Err(anyhow!("Mock estimate failure"));
        }
        Ok(self.estimate)
    }

    async fn gas_price(&self) -> Result<u128> {
        if self.failure_config.fail_on_gas_price {
            return Err(anyhow!("Mock gas price failure"));
        }
        Ok(self.gas_price)
    }

    async fn send(&self, tx: TransactionRequest, timeout: Duration) -> Result<TransferReceipt> {
        let gas_limit = tx.gas.unwrap_or(u64::MAX);
        let tx_gas_price = tx.gas_price;
        let index = {
            let mut sent = self.sent.write().unwrap();
            sent.push(tx);
            sent.len()
        };

        if gas_limit < self.required_gas {
            return Err(NetworkError::SendFailed(format!(
                "intrinsic gas too low: have {}, want {}",
                gas_limit, self.required_gas
            ))
            .into());
        }

        let tx_hash = B256::with_last_byte(index as u8);
        if self.failure_config.timeout_all {
            return Err(NetworkError::ReceiptTimeout {
                tx_hash,
                seconds: timeout.as_secs(),
            }
            .into());
        }

        Ok(TransferReceipt {
            tx_hash,
            success: !self.failure_config.revert_all,
            gas_used: self.required_gas as u128,
            effective_gas_price: tx_gas_price.unwrap_or(self.gas_price),
            block_number: Some(index as u64),
        })
    }
}
