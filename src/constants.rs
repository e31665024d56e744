//! Application-wide constants
//!
//! Default values for the probe live here so the config layer, the CLI and
//! the tests agree on them.

/// Probe defaults
pub mod probe {
    /// RPC endpoint of the local test node
    pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:7545";

    /// Name used for the default network
    pub const DEFAULT_NETWORK_NAME: &str = "nitro-local";

    /// Recipient of the test transfer
    pub const DEFAULT_RECIPIENT: &str = "0x27Cc3B0a2FA10218B116799380410AD7B93D9314";

    /// Amount transferred, in ether
    pub const DEFAULT_VALUE_ETHER: &str = "1";
}

/// Gas-related constants
pub mod gas {
    /// Gas limit of the second, hardcoded attempt
    pub const DEFAULT_HARDCODED_GAS_LIMIT: u64 = 300_000;

    /// Intrinsic gas of a plain value transfer
    pub const MIN_TRANSFER_GAS: u64 = 21_000;

    /// Estimates are used as returned by the node unless configured otherwise
    pub const DEFAULT_GAS_MULTIPLIER: f64 = 1.0;
}

/// Time-related constants
pub mod time {
    /// How long to wait for a receipt before giving up on an attempt (in seconds)
    pub const DEFAULT_RECEIPT_TIMEOUT_SECS: u64 = 60;
}

/// Wallet-related constants
pub mod wallet {
    /// Pre-funded key of the local dev chain. Public, never use it elsewhere.
    pub const DEV_FUNDER_PRIVATE_KEY: &str =
        "0xe887f7d17d07cc7b8004053fb8826f6657084e88904bb61590e498ca04704cf2";

    /// Prefix of network-specific private key environment variables
    pub const PRIVATE_KEY_ENV_PREFIX: &str = "GAS_PROBE_PRIVATE_KEY_";

    /// Generic private key environment variable
    pub const GENERIC_PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";
}
