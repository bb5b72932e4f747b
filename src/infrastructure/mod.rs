//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. This layer spawns processes.

pub mod transfer;

pub use transfer::RsyncTransfer;
