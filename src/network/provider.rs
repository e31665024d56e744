use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use alloy::{
    network::{EthereumWallet, ReceiptResponse},
    primitives::{Address, TxHash, U256},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::{
        http::{Client, Http},
        Transport,
    },
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};
use url::Url;

use super::backend::{TransferBackend, TransferReceipt};
use crate::config::models::Network;
use crate::utils::TransactionLogger;

/// Errors that can occur when talking to the node
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Invalid RPC URL {url}: {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("RPC connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Failed to send transaction: {0}")]
    SendFailed(String),

    #[error("Failed to get receipt for 0x{tx_hash:x}: {reason}")]
    ReceiptFailed { tx_hash: TxHash, reason: String },

    #[error("Timed out after {seconds}s waiting for receipt of 0x{tx_hash:x}")]
    ReceiptTimeout { tx_hash: TxHash, seconds: u64 },
}

/// A provider for one network together with the funder that signs through it
pub struct NodeClient<T, P>
where
    T: Transport + Clone,
    P: Provider<T>,
{
    provider: Arc<P>,
    network_name: String,
    rpc_url: String,
    funder: Address,
    _phantom: PhantomData<T>,
}

/// Build a signing client for `network`.
///
/// The provider fills nonce, chain id and any fees the request leaves unset.
/// No request is made until the client is used.
pub fn connect(
    network: &Network,
    signer: PrivateKeySigner,
) -> Result<NodeClient<Http<Client>, impl Provider<Http<Client>>>> {
    let url = Url::parse(&network.rpc_url).map_err(|e| NetworkError::InvalidRpcUrl {
        url: network.rpc_url.clone(),
        reason: e.to_string(),
    })?;

    let funder = signer.address();
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_http(url);

    Ok(NodeClient::new(
        provider,
        network.name.clone(),
        network.rpc_url.clone(),
        funder,
    ))
}

impl<T, P> NodeClient<T, P>
where
    T: Transport + Clone,
    P: Provider<T>,
{
    pub fn new(provider: P, network_name: String, rpc_url: String, funder: Address) -> Self {
        Self {
            provider: Arc::new(provider),
            network_name,
            rpc_url,
            funder,
            _phantom: PhantomData,
        }
    }

    pub fn network_name(&self) -> &str {
        &self.network_name
    }

    /// Verify the node answers, returning its current block number
    pub async fn check_connection(&self) -> Result<u64> {
        match self.provider.get_block_number().await {
            Ok(block_number) => {
                info!(
                    "Connected to RPC at {}, current block: {}",
                    self.rpc_url, block_number
                );
                Ok(block_number)
            }
            Err(err) => {
                error!("Failed to connect to RPC at {}: {}", self.rpc_url, err);
                Err(NetworkError::ConnectionFailed(err.to_string()).into())
            }
        }
    }
}

#[async_trait]
impl<T, P> TransferBackend for NodeClient<T, P>
where
    T: Transport + Clone,
    P: Provider<T> + 'static,
{
    fn funder(&self) -> Address {
        self.funder
    }

    async fn chain_id(&self) -> Result<u64> {
        self.provider
            .get_chain_id()
            .await
            .with_context(|| format!("Failed to get chain ID for network {}", self.network_name))
    }

    async fn balance(&self, address: Address) -> Result<U256> {
        self.provider
            .get_balance(address)
            .await
            .with_context(|| {
                format!(
                    "Failed to get balance of {} on network {}",
                    address, self.network_name
                )
            })
    }

    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64> {
        self.provider
            .estimate_gas(tx)
            .await
            .with_context(|| format!("Failed to estimate gas on network {}", self.network_name))
    }

    async fn gas_price(&self) -> Result<u128> {
        self.provider
            .get_gas_price()
            .await
            .with_context(|| format!("Failed to get gas price for network {}", self.network_name))
    }

    async fn send(&self, tx: TransactionRequest, timeout: Duration) -> Result<TransferReceipt> {
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| NetworkError::SendFailed(e.to_string()))?;

        let tx_hash = *pending.tx_hash();
        TransactionLogger::log_pending(tx_hash);

        let receipt = match tokio::time::timeout(timeout, pending.get_receipt()).await {
            Ok(Ok(receipt)) => receipt,
            Ok(Err(e)) => {
                return Err(NetworkError::ReceiptFailed {
                    tx_hash,
                    reason: e.to_string(),
                }
                .into())
            }
            Err(_) => {
                return Err(NetworkError::ReceiptTimeout {
                    tx_hash,
                    seconds: timeout.as_secs(),
                }
                .into())
            }
        };

        Ok(TransferReceipt {
            tx_hash,
            success: receipt.status(),
            gas_used: u128::from(receipt.gas_used),
            effective_gas_price: receipt.effective_gas_price,
            block_number: receipt.block_number,
        })
    }
}
