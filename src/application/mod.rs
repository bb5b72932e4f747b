//! Application Layer
//!
//! Use cases that orchestrate the flow between configuration, domain
//! values and the transfer port.
//!
//! - `DeployUseCase` - one checksum mirror of the generated site

pub mod deploy;

pub use deploy::{DeployError, DeployOptions, DeployOutcome, DeployPlan, DeployUseCase};
