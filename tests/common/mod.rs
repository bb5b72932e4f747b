//! Common test utilities for sitepush CLI tests.
//!
//! - `TestEnv`: isolated project/home directories plus a fake `rsync`
//!   injected through PATH, so no test touches the network.

#![allow(dead_code)]

pub mod env;

pub use env::*;
