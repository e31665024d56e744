use anyhow::Result;
use clap::Parser;

use gas_probe::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up private keys from a local .env file, if any
    dotenv::dotenv().ok();

    // Logs go to stderr so the report on stdout stays machine-readable
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    cli::execute(Cli::parse()).await
}
