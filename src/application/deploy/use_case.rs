//! Deploy Use Case
//!
//! Builds the mirror plan from an explicit `DeployConfig` and hands it to a
//! `Transfer` exactly once:
//! 1. Resolve source, destination and mirror options
//! 2. Run the transfer
//! 3. Map the result to `Completed` or `Failed`
//!
//! Nothing is retried and nothing is rolled back.

use thiserror::Error;
use tracing::{info, warn};

use crate::config::DeployConfig;
use crate::domain::ports::{Transfer, TransferError};
use crate::error::SitepushError;

use super::options::{DeployOptions, DeployOutcome, DeployPlan};

/// Errors that stop a deploy before the utility produced an exit status
#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Config(#[from] SitepushError),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}

impl DeployError {
    /// Process exit status that reports this error to the caller
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 1,
            Self::Transfer(err) => err.exit_code(),
        }
    }
}

/// Deploy use case - one mirror of the generated site
pub struct DeployUseCase<T: Transfer> {
    transfer: T,
}

impl<T: Transfer> DeployUseCase<T> {
    pub fn new(transfer: T) -> Self {
        Self { transfer }
    }

    /// Run the mirror once and report how it ended
    pub fn execute(
        &self,
        config: &DeployConfig,
        options: &DeployOptions,
    ) -> Result<DeployOutcome, DeployError> {
        let plan = DeployPlan::from_config(config, options)?;

        info!(
            transfer = self.transfer.name(),
            source = %plan.source,
            destination = %plan.destination,
            port = plan.mirror.port,
            dry_run = plan.mirror.dry_run,
            "mirroring site"
        );

        match self
            .transfer
            .mirror(&plan.source, &plan.destination, &plan.mirror)
        {
            Ok(report) => Ok(DeployOutcome::Completed(report)),
            Err(err @ (TransferError::Failed { .. } | TransferError::Terminated { .. })) => {
                warn!("{}", err);
                Ok(DeployOutcome::Failed {
                    exit_code: err.exit_code(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }
}
