//! Test utilities shared by the unit tests

pub mod mocks;

pub use mocks::*;
