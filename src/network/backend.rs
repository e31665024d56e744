use std::time::Duration;

use alloy::{
    primitives::{Address, TxHash, U256},
    rpc::types::TransactionRequest,
};
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

/// What the probe keeps from a transaction receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReceipt {
    pub tx_hash: TxHash,
    /// Receipt status: true when execution succeeded
    pub success: bool,
    pub gas_used: u128,
    pub effective_gas_price: u128,
    pub block_number: Option<u64>,
}

/// The node operations a probe run needs.
///
/// Sending signs with the funder's wallet; all other calls are reads.
#[async_trait]
pub trait TransferBackend: Send + Sync {
    /// Address that signs and pays for the transfers
    fn funder(&self) -> Address;

    async fn chain_id(&self) -> Result<u64>;

    async fn balance(&self, address: Address) -> Result<U256>;

    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64>;

    /// Current legacy gas price in wei
    async fn gas_price(&self) -> Result<u128>;

    /// Submit `tx` and wait up to `timeout` for its receipt
    async fn send(&self, tx: TransactionRequest, timeout: Duration) -> Result<TransferReceipt>;
}
