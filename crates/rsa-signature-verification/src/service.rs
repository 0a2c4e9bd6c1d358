//! # RSA Verification Service
//!
//! Application service layer that implements the `RsaVerificationApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`RsaVerificationApi`)
//! - Uses the outbound port (`AuthorizationGateway`) for the action a
//!   verified signature unlocks
//! - Delegates decoding and cryptographic operations to the domain layer
//!
//! ## Verification Pipeline
//!
//! One pass, no retries:
//!
//! ```text
//! Received -> Decoded -> Digested -> Exponentiated -> Compared -> Accepted | Rejected
//! ```
//!
//! Anything wrong before `Decoded` is a [`DecodeError`] and is reported as
//! such. Anything wrong afterwards is just `Rejected`.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::VerifierConfig;
use crate::domain::bigint::{BigUint, MontgomeryModulus};
use crate::domain::der::RsaPublicKey;
use crate::domain::digest;
use crate::domain::entities::{BatchVerificationResult, VerificationOutcome, VerificationRequest};
use crate::domain::errors::{AuthorizeError, DecodeError};
use crate::domain::pkcs1;
use crate::domain::wire;
use crate::ports::inbound::RsaVerificationApi;
use crate::ports::outbound::AuthorizationGateway;

// =============================================================================
// VERIFIER
// =============================================================================

/// Stateless verifier enforcing a [`VerifierConfig`] policy.
#[derive(Clone, Debug, Default)]
pub struct RsaVerifier {
    config: VerifierConfig,
}

impl RsaVerifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }
}

impl RsaVerificationApi for RsaVerifier {
    fn verify_instruction(&self, data: &[u8]) -> Result<VerificationOutcome, DecodeError> {
        let request = wire::decode(data)?;
        self.verify_request(&request)
    }

    fn verify_request(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationOutcome, DecodeError> {
        let checked = check_request(&self.config, request)?;
        let outcome = verify_checked(request, &checked);

        match outcome {
            VerificationOutcome::Accepted => debug!(
                key_bits = request.key_length.bits(),
                hash = ?request.hash,
                "RSA signature accepted"
            ),
            VerificationOutcome::Rejected => debug!(
                key_bits = request.key_length.bits(),
                hash = ?request.hash,
                "RSA signature rejected"
            ),
        }
        Ok(outcome)
    }

    fn batch_verify(&self, instructions: &[&[u8]]) -> BatchVerificationResult {
        let results: Vec<_> = instructions
            .par_iter()
            .map(|data| self.verify_instruction(data))
            .collect();
        BatchVerificationResult::from_results(results)
    }
}

// =============================================================================
// SERVICE
// =============================================================================

/// RSA Verification Service.
///
/// Wraps an [`RsaVerifier`] and forwards accepted requests to the host
/// through an [`AuthorizationGateway`].
pub struct RsaVerificationService<G: AuthorizationGateway> {
    verifier: RsaVerifier,
    gateway: G,
}

impl<G: AuthorizationGateway> RsaVerificationService<G> {
    /// Create a new verification service.
    ///
    /// # Arguments
    /// * `config` - Verification policy
    /// * `gateway` - The host action unlocked by an accepted signature
    pub fn new(config: VerifierConfig, gateway: G) -> Self {
        Self {
            verifier: RsaVerifier::new(config),
            gateway,
        }
    }

    pub fn verifier(&self) -> &RsaVerifier {
        &self.verifier
    }

    /// Verify an instruction and run the host action if it is accepted.
    ///
    /// A rejected signature never reaches the gateway.
    pub async fn verify_and_authorize(&self, data: &[u8]) -> Result<(), AuthorizeError> {
        let request = wire::decode(data)?;

        if !self.verifier.verify_request(&request)?.is_accepted() {
            return Err(AuthorizeError::SignatureRejected);
        }

        self.gateway.authorize(request).await.map_err(|e| {
            warn!(error = %e, "Authorization failed after accepted signature");
            AuthorizeError::AuthorizationFailed(e.to_string())
        })
    }
}

impl<G: AuthorizationGateway> RsaVerificationApi for RsaVerificationService<G> {
    fn verify_instruction(&self, data: &[u8]) -> Result<VerificationOutcome, DecodeError> {
        self.verifier.verify_instruction(data)
    }

    fn verify_request(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationOutcome, DecodeError> {
        self.verifier.verify_request(request)
    }

    fn batch_verify(&self, instructions: &[&[u8]]) -> BatchVerificationResult {
        self.verifier.batch_verify(instructions)
    }
}

// =============================================================================
// PIPELINE STAGES
// =============================================================================

/// Key material that passed every decode-time check.
struct CheckedKey {
    key: RsaPublicKey,
    modulus: MontgomeryModulus,
}

/// Decode stage: everything that may be reported distinctly.
fn check_request(
    config: &VerifierConfig,
    request: &VerificationRequest,
) -> Result<CheckedKey, DecodeError> {
    if request.signature.len() != request.key_length.modulus_len() {
        return Err(DecodeError::MalformedInstruction);
    }
    if !config.is_algorithm_allowed(request.hash) {
        return Err(DecodeError::UnsupportedAlgorithm);
    }

    let key = RsaPublicKey::from_der(&request.pubkey)?;
    if key.bits() != request.key_length.bits() {
        return Err(DecodeError::KeyLengthMismatch {
            declared: request.key_length.bits(),
            actual: key.bits(),
        });
    }
    let modulus = MontgomeryModulus::from_be_bytes(key.modulus())?;

    Ok(CheckedKey { key, modulus })
}

/// Digest, exponentiate and compare. Every failure is `Rejected`.
fn verify_checked(request: &VerificationRequest, checked: &CheckedKey) -> VerificationOutcome {
    let digest = digest::digest(request.hash, &request.message);

    // A signature representative >= n is out of range (RFC 8017 §8.2.2).
    let recovered = BigUint::from_be_bytes(&request.signature)
        .and_then(|s| checked.modulus.modpow(&s, checked.key.exponent()))
        .and_then(|m| m.to_be_bytes(checked.modulus.byte_len()));

    match recovered {
        Ok(em) => pkcs1::verify(&em, request.hash, &digest).into(),
        Err(_) => VerificationOutcome::Rejected,
    }
}

// =============================================================================
// TESTS
// =============================================================================
