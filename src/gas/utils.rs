//! Gas unit conversions and arithmetic shared by the probe and its reports.

use alloy::primitives::U256;

/// Convert gwei (possibly fractional) to wei
pub fn gwei_to_wei(gwei: f64) -> U256 {
    // 1 gwei = 10^9 wei
    U256::from((gwei * 1e9) as u64)
}

/// Total cost in wei of `gas_used` units at `gas_price` wei each
pub fn calculate_gas_cost(gas_used: u128, gas_price: u128) -> U256 {
    U256::from(gas_used).saturating_mul(U256::from(gas_price))
}

/// Scale a gas limit by `multiplier`, rounding up.
///
/// A multiplier of exactly 1.0 returns the limit untouched so a raw
/// estimate is never perturbed by float rounding.
pub fn apply_gas_multiplier(gas_limit: u64, multiplier: f64) -> u64 {
    if multiplier == 1.0 {
        return gas_limit;
    }
    (gas_limit as f64 * multiplier).ceil() as u64
}

/// Format wei with the most readable unit, e.g. "1.5000 ETH", "100.00 gwei", "1000 wei"
pub fn format_wei(wei: U256) -> String {
    let wei_f64 = wei.min(U256::from(u128::MAX)).to::<u128>() as f64;

    if wei_f64 >= 1e18 {
        format!("{:.4} ETH", wei_f64 / 1e18)
    } else if wei_f64 >= 1e9 {
        format!("{:.2} gwei", wei_f64 / 1e9)
    } else {
        format!("{wei} wei")
    }
}
