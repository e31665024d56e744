pub mod tx_logger;

pub use tx_logger::TransactionLogger;
