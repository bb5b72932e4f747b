//! Presentation Layer
//!
//! Rendering of plans and outcomes for the terminal and for `--json`.

pub mod output;

pub use output::{render_command, shell_quote, DeployReport};
