pub mod estimator;
pub mod transaction_builder;
pub mod utils;


pub use estimator::{GasEstimate, GasEstimator};
pub use transaction_builder::TransferTxBuilder;
