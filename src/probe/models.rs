use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::error::ProbeError;
use crate::gas::{utils, GasEstimate};
use crate::network::TransferReceipt;

/// Where an attempt's gas limit came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptKind {
    /// Limit taken from the node's gas estimate
    Estimated,
    /// Fixed limit from configuration
    Hardcoded,
}

impl AttemptKind {
    pub fn label(&self) -> &'static str {
        match self {
            AttemptKind::Estimated => "estimated",
            AttemptKind::Hardcoded => "hardcoded",
        }
    }
}

impl fmt::Display for AttemptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a single send ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// Mined with a successful status
    Confirmed { receipt: TransferReceipt },
    /// Mined, but execution failed
    Reverted { receipt: TransferReceipt },
    /// Rejected by the node, or no receipt arrived
    Failed { reason: String },
}

impl AttemptOutcome {
    pub fn from_receipt(receipt: TransferReceipt) -> Self {
        if receipt.success {
            AttemptOutcome::Confirmed { receipt }
        } else {
            AttemptOutcome::Reverted { receipt }
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, AttemptOutcome::Confirmed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptReport {
    pub kind: AttemptKind,
    pub gas_limit: u64,
    pub outcome: AttemptOutcome,
}

/// Everything a probe run observed
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub started_at: DateTime<Utc>,
    pub network: String,
    pub chain_id: u64,
    pub funder: Address,
    pub recipient: Address,
    pub value_wei: U256,
    pub balance_wei: U256,
    pub gas_estimate: Option<GasEstimate>,
    pub attempts: Vec<AttemptReport>,
}

impl ProbeReport {
    pub fn attempt(&self, kind: AttemptKind) -> Option<&AttemptReport> {
        self.attempts.iter().find(|a| a.kind == kind)
    }

    /// True when every attempt that ran was confirmed
    pub fn all_confirmed(&self) -> bool {
        self.attempts.iter().all(|a| a.outcome.is_confirmed())
    }

    /// Fails unless every attempt that ran was confirmed. A run that sent
    /// nothing passes.
    pub fn strict_check(&self) -> Result<(), ProbeError> {
        if self.all_confirmed() {
            return Ok(());
        }
        let failed = self
            .attempts
            .iter()
            .filter(|a| !a.outcome.is_confirmed())
            .count();
        Err(ProbeError::AttemptsFailed {
            failed,
            total: self.attempts.len(),
        })
    }

    /// Human-readable summary, one line per fact
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("network:   {} (chain id {})", self.network, self.chain_id),
            format!(
                "funder:    {} ({})",
                self.funder,
                utils::format_wei(self.balance_wei)
            ),
            format!(
                "transfer:  {} to {}",
                utils::format_wei(self.value_wei),
                self.recipient
            ),
        ];

        if let Some(estimate) = &self.gas_estimate {
            lines.push(format!(
                "estimate:  {} gas (submitted as {})",
                estimate.estimated, estimate.gas_limit
            ));
        }

        for attempt in &self.attempts {
            let result = match &attempt.outcome {
                AttemptOutcome::Confirmed { receipt } => {
                    format!("works, {}", describe_receipt(receipt))
                }
                AttemptOutcome::Reverted { receipt } => {
                    format!("reverted, {}", describe_receipt(receipt))
                }
                AttemptOutcome::Failed { reason } => format!("doesn't work: {reason}"),
            };
            lines.push(format!(
                "{:<10} gas limit {}: {}",
                format!("{}:", attempt.kind),
                attempt.gas_limit,
                result
            ));
        }

        lines.join("\n")
    }
}

fn describe_receipt(receipt: &TransferReceipt) -> String {
    let cost = utils::calculate_gas_cost(receipt.gas_used, receipt.effective_gas_price);
    format!(
        "tx 0x{:x}, gas used {}, cost {}",
        receipt.tx_hash,
        receipt.gas_used,
        utils::format_wei(cost)
    )
}
