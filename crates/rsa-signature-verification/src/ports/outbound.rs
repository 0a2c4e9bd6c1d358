//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits that define dependencies the verifier needs.

use crate::domain::entities::VerificationRequest;
use thiserror::Error;

/// Error from the host's authorization step.
#[derive(Debug, Error)]
pub enum AuthorizationError {
    /// The host refused the action
    #[error("Authorization refused: {reason}")]
    Refused { reason: String },

    /// Communication error
    #[error("Communication error: {0}")]
    CommunicationError(String),
}

/// Gateway to the host action guarded by a signature.
///
/// Only requests whose signature was accepted ever reach this port.
#[async_trait::async_trait]
pub trait AuthorizationGateway: Send + Sync {
    /// Perform the guarded action for a verified request.
    ///
    /// # Errors
    /// * `AuthorizationError::Refused` - The host refused the action
    /// * `AuthorizationError::CommunicationError` - The host could not be reached
    async fn authorize(&self, request: VerificationRequest) -> Result<(), AuthorizationError>;
}
