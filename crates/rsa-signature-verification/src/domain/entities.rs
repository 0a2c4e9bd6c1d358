//! # Domain Entities
//!
//! Core data structures for RSA signature verification.
//!
//! Wire ordinals for [`KeyLength`] and [`HashAlgorithm`] are sparse and fixed
//! by existing client encoders. They form a lookup table and must never be
//! renumbered.

use serde::{Deserialize, Serialize};

use super::errors::DecodeError;

// =============================================================================
// Selectors
// =============================================================================

/// Supported RSA modulus sizes.
///
/// The ordinal is the modulus size in multiples of 512 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum KeyLength {
    Rsa512 = 1,
    Rsa1024 = 2,
    Rsa2048 = 4,
    Rsa3072 = 6,
    Rsa4096 = 8,
}

impl KeyLength {
    /// All supported key lengths, smallest first.
    pub const ALL: [KeyLength; 5] = [
        KeyLength::Rsa512,
        KeyLength::Rsa1024,
        KeyLength::Rsa2048,
        KeyLength::Rsa3072,
        KeyLength::Rsa4096,
    ];

    /// Wire ordinal.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a key length by wire ordinal.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.ordinal() == ordinal)
    }

    /// Modulus size in bits.
    pub fn bits(self) -> usize {
        self.ordinal() as usize * 512
    }

    /// Modulus (and signature) size in bytes.
    pub fn modulus_len(self) -> usize {
        self.bits() / 8
    }

    /// Look up a key length by modulus bit size.
    pub fn from_bits(bits: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.bits() == bits)
    }
}

/// Digest function applied to the message before padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HashAlgorithm {
    /// No hashing: the message itself is padded and signed.
    ///
    /// Provides no collision resistance. Only for tests and compatibility
    /// with legacy callers; production deployments disable it.
    Naive = 0,
    Sha256 = 1,
    Sha3_256 = 2,
    Blake3 = 4,
}

impl HashAlgorithm {
    /// All supported algorithms.
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Naive,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Blake3,
    ];

    /// Wire ordinal.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Digest output length in bytes, `None` for the pass-through mode.
    pub fn digest_len(self) -> Option<usize> {
        match self {
            HashAlgorithm::Naive => None,
            HashAlgorithm::Sha256 | HashAlgorithm::Sha3_256 | HashAlgorithm::Blake3 => Some(32),
        }
    }

    /// Whether this algorithm may be enabled in a production profile.
    pub fn is_production_safe(self) -> bool {
        !matches!(self, HashAlgorithm::Naive)
    }
}

impl TryFrom<u8> for HashAlgorithm {
    type Error = DecodeError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|h| h.ordinal() == ordinal)
            .ok_or(DecodeError::UnsupportedAlgorithm)
    }
}

// =============================================================================
// Request / Outcome
// =============================================================================

/// A decoded verification instruction.
///
/// Built once per call by the wire decoder and dropped when verification
/// completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationRequest {
    /// Declared modulus size
    pub key_length: KeyLength,
    /// Digest applied to `message`
    pub hash: HashAlgorithm,
    /// Signed message (or raw payload for [`HashAlgorithm::Naive`])
    pub message: Vec<u8>,
    /// Signature, exactly `key_length.modulus_len()` bytes
    pub signature: Vec<u8>,
    /// DER public key (PKCS#1 or SubjectPublicKeyInfo)
    pub pubkey: Vec<u8>,
}

impl VerificationRequest {
    pub fn new(
        key_length: KeyLength,
        hash: HashAlgorithm,
        message: &[u8],
        signature: &[u8],
        pubkey: &[u8],
    ) -> Self {
        Self {
            key_length,
            hash,
            message: message.to_vec(),
            signature: signature.to_vec(),
            pubkey: pubkey.to_vec(),
        }
    }
}

/// Final result of a verification that got past decoding.
///
/// Deliberately carries no failure reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationOutcome {
    Accepted,
    Rejected,
}

impl VerificationOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, VerificationOutcome::Accepted)
    }
}

impl From<bool> for VerificationOutcome {
    fn from(valid: bool) -> Self {
        if valid {
            VerificationOutcome::Accepted
        } else {
            VerificationOutcome::Rejected
        }
    }
}

/// Result of batch verification.
#[derive(Clone, Debug)]
pub struct BatchVerificationResult {
    /// Individual results, in input order
    pub results: Vec<Result<VerificationOutcome, DecodeError>>,
    /// Whether every instruction was accepted
    pub all_accepted: bool,
    /// Count of accepted instructions
    pub accepted_count: usize,
    /// Count of rejected or undecodable instructions
    pub rejected_count: usize,
}

impl BatchVerificationResult {
    /// Create a batch result from individual results.
    pub fn from_results(results: Vec<Result<VerificationOutcome, DecodeError>>) -> Self {
        let accepted_count = results
            .iter()
            .filter(|r| matches!(r, Ok(VerificationOutcome::Accepted)))
            .count();
        let rejected_count = results.len() - accepted_count;

        Self {
            results,
            all_accepted: rejected_count == 0,
            accepted_count,
            rejected_count,
        }
    }
}
