//! Property tests for sitepush.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/command_line.rs"]
mod command_line;

#[path = "properties/remote_target.rs"]
mod remote_target;
