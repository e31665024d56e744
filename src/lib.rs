//! Smoke test for gas estimation on a local EVM node.
//!
//! Funds a transfer from a test wallet, asks the node for a gas estimate and
//! sends the transfer twice: once with the estimate as gas limit and once
//! with a hardcoded limit, reporting which of the two goes through.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod gas;
pub mod network;
pub mod probe;
pub mod utils;
pub mod wallet;

#[cfg(test)]
pub mod test_utils;

pub use error::ProbeError;
