//! Deploy Use Case Module

mod options;
mod use_case;

pub use options::{DeployOptions, DeployOutcome, DeployPlan};
pub use use_case::{DeployError, DeployUseCase};
