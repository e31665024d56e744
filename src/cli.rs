use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::config::{self, models::ProbeConfig};
use crate::error::ProbeError;
use crate::network;
use crate::probe::{ProbeReport, ProbeStage, TransferProbe};
use crate::wallet::{self, create_key_storage};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "gas-probe - check whether a node's gas estimate is enough to land a transfer",
    long_about = "Sends a value transfer from a test wallet twice: once with the gas limit the node \
                  estimates and once with a hardcoded gas limit, then reports which attempt \
                  was mined successfully."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// RPC URL of the node, overrides the configuration
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,

    /// Recipient address, overrides the configuration
    #[arg(long, global = true)]
    pub to: Option<String>,

    /// Amount to transfer in ether, overrides the configuration
    #[arg(long, value_name = "ETHER", global = true)]
    pub value: Option<String>,

    /// Gas limit of the hardcoded attempt, overrides the configuration
    #[arg(long, global = true)]
    pub gas_limit: Option<u64>,

    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Exit with an error unless every attempt was confirmed
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Estimate gas and send with both gas limits (default behavior)
    Run,
    /// Only show the funder's balance
    Balance,
    /// Show the balance and the gas estimate, without sending
    Estimate,
}

impl Cli {
    pub fn stage(&self) -> ProbeStage {
        match self.command.unwrap_or(Commands::Run) {
            Commands::Run => ProbeStage::Full,
            Commands::Balance => ProbeStage::Balance,
            Commands::Estimate => ProbeStage::Estimate,
        }
    }

    /// Apply command line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut ProbeConfig) {
        if let Some(rpc_url) = &self.rpc_url {
            config.network.rpc_url = rpc_url.clone();
        }
        if let Some(to) = &self.to {
            config.transfer.recipient = to.clone();
        }
        if let Some(value) = &self.value {
            config.transfer.value_ether = value.clone();
        }
        if let Some(gas_limit) = self.gas_limit {
            config.transfer.hardcoded_gas_limit = gas_limit;
        }
    }
}

/// Run the command described by `cli`
pub async fn execute(cli: Cli) -> Result<()> {
    let mut config = config::resolve_config(cli.config.as_deref()).map_err(ProbeError::from)?;
    cli.apply_overrides(&mut config);
    config::validate_config(&config).map_err(ProbeError::from)?;

    info!(
        "Using network {} at {}",
        config.network.name, config.network.rpc_url
    );

    let key_storage = create_key_storage(&config.key_storage)?;
    let signer = wallet::load_signer(key_storage.as_ref(), &config.network.name).await?;

    let client = network::connect(&config.network, signer)?;
    client.check_connection().await?;

    let report = TransferProbe::new(&client, &config)
        .run(cli.stage())
        .await
        .context("Probe run failed")?;

    finish(&report, cli.json, cli.strict)?;

    Ok(())
}

/// Print the report, then apply `--strict`. Runs for every stage.
fn finish(report: &ProbeReport, json: bool, strict: bool) -> Result<(), ProbeError> {
    print_report(report, json)?;
    info!("Done");

    if strict {
        report.strict_check()?;
    }
    Ok(())
}

fn print_report(report: &ProbeReport, json: bool) -> Result<(), ProbeError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report.summary());
    }
    Ok(())
}
