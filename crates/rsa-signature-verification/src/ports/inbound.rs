//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of the verifier.

use crate::domain::entities::{BatchVerificationResult, VerificationOutcome, VerificationRequest};
use crate::domain::errors::DecodeError;

/// Primary RSA Verification API.
///
/// This is the main entry point for verification. Implementations must be
/// thread-safe (`Send + Sync`).
///
/// Every method follows the same contract:
/// - structural problems found while decoding come back as `Err(DecodeError)`
/// - once decoding succeeds the answer is `Ok(Accepted)` or `Ok(Rejected)`,
///   with no indication of why a signature was rejected
pub trait RsaVerificationApi: Send + Sync {
    /// Decode a raw instruction and verify it.
    fn verify_instruction(&self, data: &[u8]) -> Result<VerificationOutcome, DecodeError>;

    /// Verify an already-decoded request.
    ///
    /// The request is re-checked against the same rules the wire decoder
    /// applies, so hand-built requests get no shortcut.
    fn verify_request(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationOutcome, DecodeError>;

    /// Verify many raw instructions in parallel.
    ///
    /// # Performance
    /// Uses parallel processing; results keep input order.
    fn batch_verify(&self, instructions: &[&[u8]]) -> BatchVerificationResult;
}
