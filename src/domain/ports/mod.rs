//! Domain Ports
//!
//! Interface definitions for infrastructure adapters.

pub mod transfer;

pub use transfer::{Transfer, TransferError, EXIT_NOT_AVAILABLE};
