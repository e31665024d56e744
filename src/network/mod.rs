pub mod backend;
pub mod provider;


pub use backend::{TransferBackend, TransferReceipt};
pub use provider::{connect, NetworkError, NodeClient};
