//! # Host Entrypoint Adapter
//!
//! The surface a host runtime calls with raw instruction bytes.
//!
//! ## Result Codes
//!
//! Hosts only see a `u32` per instruction. Codes are part of the external
//! interface and never change meaning:
//!
//! | Code | Error |
//! |------|-------|
//! | 0 | success (signature accepted) |
//! | 1 | malformed instruction |
//! | 2 | unsupported hash algorithm |
//! | 3 | key length mismatch |
//! | 4 | invalid modulus |
//! | 5 | invalid public exponent |
//! | 6 | instruction too large |
//! | 7 | batch too large |
//! | 8 | signature rejected |
//!
//! ## Security
//!
//! - Every way a signature can fail after decoding maps to code 8
//! - Size limits are checked before any decoding work

use crate::config::VerifierConfig;
use crate::domain::entities::VerificationOutcome;
use crate::domain::errors::DecodeError;
use crate::ports::inbound::RsaVerificationApi;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

// =============================================================================
// RESULT CODES
// =============================================================================

/// Stable result codes reported to the host.
pub mod codes {
    pub const SUCCESS: u32 = 0;
    pub const MALFORMED_INSTRUCTION: u32 = 1;
    pub const UNSUPPORTED_ALGORITHM: u32 = 2;
    pub const KEY_LENGTH_MISMATCH: u32 = 3;
    pub const INVALID_MODULUS: u32 = 4;
    pub const INVALID_PUBLIC_EXPONENT: u32 = 5;
    pub const INSTRUCTION_TOO_LARGE: u32 = 6;
    pub const BATCH_TOO_LARGE: u32 = 7;
    pub const SIGNATURE_REJECTED: u32 = 8;
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors returned to the host.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// Instruction failed to decode
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Instruction exceeds the configured size limit
    #[error("Instruction size {size} exceeds maximum {max}")]
    InstructionTooLarge { size: usize, max: usize },

    /// Batch exceeds the configured instruction count
    #[error("Batch size {size} exceeds maximum {max}")]
    BatchTooLarge { size: usize, max: usize },

    /// Signature did not verify
    #[error("Signature rejected")]
    SignatureRejected,
}

impl HostError {
    /// Stable numeric code for this error.
    pub fn code(&self) -> u32 {
        match self {
            HostError::Decode(DecodeError::MalformedInstruction) => codes::MALFORMED_INSTRUCTION,
            HostError::Decode(DecodeError::UnsupportedAlgorithm) => codes::UNSUPPORTED_ALGORITHM,
            HostError::Decode(DecodeError::KeyLengthMismatch { .. }) => codes::KEY_LENGTH_MISMATCH,
            HostError::Decode(DecodeError::InvalidModulus) => codes::INVALID_MODULUS,
            HostError::Decode(DecodeError::InvalidPublicExponent) => {
                codes::INVALID_PUBLIC_EXPONENT
            }
            HostError::InstructionTooLarge { .. } => codes::INSTRUCTION_TOO_LARGE,
            HostError::BatchTooLarge { .. } => codes::BATCH_TOO_LARGE,
            HostError::SignatureRejected => codes::SIGNATURE_REJECTED,
        }
    }
}

/// Collapse a per-instruction result into its host code.
pub fn result_code(result: &Result<(), HostError>) -> u32 {
    match result {
        Ok(()) => codes::SUCCESS,
        Err(e) => e.code(),
    }
}

// =============================================================================
// INSTRUCTION HANDLER
// =============================================================================

/// Entrypoint handler enforcing instruction and batch limits.
pub struct InstructionHandler<S: RsaVerificationApi> {
    service: S,
    max_instruction_len: usize,
    max_batch_size: usize,
}

impl<S: RsaVerificationApi> InstructionHandler<S> {
    /// Create a handler using the limits from `config`.
    pub fn new(service: S, config: &VerifierConfig) -> Self {
        Self {
            service,
            max_instruction_len: config.max_instruction_len,
            max_batch_size: config.max_batch_size,
        }
    }

    /// Get a reference to the underlying service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Process one instruction.
    ///
    /// `Ok(())` means the signature was accepted.
    pub fn process(&self, data: &[u8]) -> Result<(), HostError> {
        // Step 1: Check size before touching the payload
        if data.len() > self.max_instruction_len {
            warn!(
                size = data.len(),
                max = self.max_instruction_len,
                "Instruction too large"
            );
            return Err(HostError::InstructionTooLarge {
                size: data.len(),
                max: self.max_instruction_len,
            });
        }

        // Step 2: Decode and verify
        match self.service.verify_instruction(data) {
            Ok(VerificationOutcome::Accepted) => {
                info!(size = data.len(), "Signature verified");
                Ok(())
            }
            Ok(VerificationOutcome::Rejected) => {
                info!(size = data.len(), "Signature rejected");
                Err(HostError::SignatureRejected)
            }
            Err(e) => {
                debug!(error = %e, "Instruction failed to decode");
                Err(HostError::Decode(e))
            }
        }
    }

    /// Process many instructions in parallel.
    ///
    /// # Security
    /// - At most `max_batch_size` instructions per call (DoS protection)
    /// - Each instruction is size-checked independently
    pub fn process_batch(
        &self,
        instructions: &[&[u8]],
    ) -> Result<Vec<Result<(), HostError>>, HostError> {
        if instructions.len() > self.max_batch_size {
            warn!(
                size = instructions.len(),
                max = self.max_batch_size,
                "Batch too large"
            );
            return Err(HostError::BatchTooLarge {
                size: instructions.len(),
                max: self.max_batch_size,
            });
        }

        Ok(instructions
            .par_iter()
            .map(|data| self.process(data))
            .collect())
    }
}

// =============================================================================
// TESTS
// =============================================================================
