//! The probe run itself: balance, estimate, then one send per gas limit.
//!
//! A failed send is recorded and the run moves on to the next attempt.
//! Failures before any send (balance, estimate) end the run.

use std::time::Duration;

use alloy::primitives::{Address, U256};
use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use super::models::{AttemptKind, AttemptOutcome, AttemptReport, ProbeReport};
use crate::config::models::ProbeConfig;
use crate::gas::{GasEstimate, GasEstimator, TransferTxBuilder};
use crate::network::TransferBackend;
use crate::utils::TransactionLogger;

/// How far a run goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStage {
    /// Stop after reading the funder's balance
    Balance,
    /// Stop after the gas estimate, without sending anything
    Estimate,
    /// Estimate, then send with the estimate and with the hardcoded limit
    Full,
}

/// Runs the gas probe against a backend
pub struct TransferProbe<'a, B: TransferBackend + ?Sized> {
    backend: &'a B,
    config: &'a ProbeConfig,
}

impl<'a, B: TransferBackend + ?Sized> TransferProbe<'a, B> {
    pub fn new(backend: &'a B, config: &'a ProbeConfig) -> Self {
        Self { backend, config }
    }

    pub async fn run(&self, stage: ProbeStage) -> Result<ProbeReport> {
        let started_at = Utc::now();
        let network = &self.config.network;
        let funder = self.backend.funder();
        let recipient = self.config.transfer.recipient_address()?;
        let value = self.config.transfer.value_wei()?;

        let chain_id = self.backend.chain_id().await?;
        info!("Probing network {} (chain id {})", network.name, chain_id);

        let balance = self
            .backend
            .balance(funder)
            .await
            .context("Failed to read funder balance")?;
        TransactionLogger::log_balance(&network.name, funder, balance);

        let mut report = ProbeReport {
            started_at,
            network: network.name.clone(),
            chain_id,
            funder,
            recipient,
            value_wei: value,
            balance_wei: balance,
            gas_estimate: None,
            attempts: Vec::new(),
        };

        if stage == ProbeStage::Balance {
            return Ok(report);
        }

        let estimate = self.estimate(funder, recipient, value).await?;
        report.gas_estimate = Some(estimate);

        if stage == ProbeStage::Estimate {
            return Ok(report);
        }

        let limits = [
            (AttemptKind::Estimated, estimate.gas_limit),
            (
                AttemptKind::Hardcoded,
                self.config.transfer.hardcoded_gas_limit,
            ),
        ];

        for (kind, gas_limit) in limits {
            let attempt = self
                .attempt(kind, gas_limit, funder, recipient, value)
                .await;
            report.attempts.push(attempt);
        }

        Ok(report)
    }

    async fn estimate(&self, funder: Address, recipient: Address, value: U256) -> Result<GasEstimate> {
        let network = &self.config.network;
        let tx = TransferTxBuilder::new(funder, recipient, value, network).build_for_estimate();

        GasEstimator::new(self.backend, &network.gas_config)
            .estimate_gas(&tx)
            .await
            .context("Gas estimation failed")
    }

    /// One send with `gas_limit`. Never fails: errors become the outcome.
    async fn attempt(
        &self,
        kind: AttemptKind,
        gas_limit: u64,
        funder: Address,
        recipient: Address,
        value: U256,
    ) -> AttemptReport {
        let outcome = match self.send(kind, gas_limit, funder, recipient, value).await {
            Ok(outcome) => outcome,
            Err(e) => {
                let reason = format!("{e:#}");
                TransactionLogger::log_failure(kind.label(), gas_limit, &reason);
                AttemptOutcome::Failed { reason }
            }
        };

        AttemptReport {
            kind,
            gas_limit,
            outcome,
        }
    }

    async fn send(
        &self,
        kind: AttemptKind,
        gas_limit: u64,
        funder: Address,
        recipient: Address,
        value: U256,
    ) -> Result<AttemptOutcome> {
        let mut builder = TransferTxBuilder::new(funder, recipient, value, &self.config.network)
            .with_gas_limit(gas_limit);
        if builder.needs_node_gas_price() {
            let gas_price = self
                .backend
                .gas_price()
                .await
                .context("Failed to read gas price for legacy transaction")?;
            builder = builder.with_node_gas_price(gas_price);
        }
        let tx = builder.build()?;
        let timeout = Duration::from_secs(self.config.transfer.receipt_timeout_seconds);

        TransactionLogger::log_submission(kind.label(), recipient, value, gas_limit);
        let receipt = self.backend.send(tx, timeout).await?;

        let label = kind.label();
        if receipt.success {
            TransactionLogger::log_confirmation(label, receipt.tx_hash, receipt.gas_used, gas_limit);
        } else {
            TransactionLogger::log_revert(label, receipt.tx_hash, receipt.gas_used, gas_limit);
        }

        Ok(AttemptOutcome::from_receipt(receipt))
    }
}
