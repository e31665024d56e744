pub mod models;
pub mod runner;


pub use models::{AttemptKind, AttemptOutcome, AttemptReport, ProbeReport};
pub use runner::{ProbeStage, TransferProbe};
