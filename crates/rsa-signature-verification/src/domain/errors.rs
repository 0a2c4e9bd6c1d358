//! # Verification Errors
//!
//! Error types for the instruction codec and big-integer arithmetic.
//!
//! Decode-time errors describe structural problems found before any
//! cryptographic work starts, so they are safe to report distinctly.
//! Verification-time failures are never represented here: they collapse
//! into [`VerificationOutcome::Rejected`](super::entities::VerificationOutcome).

use thiserror::Error;

/// Structural problems detected while decoding a verification instruction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer too short, trailing bytes, unknown ordinal, bad field length
    /// or malformed DER public key
    #[error("Malformed instruction")]
    MalformedInstruction,

    /// Hash algorithm selector not recognized or disabled by policy
    #[error("Unsupported hash algorithm")]
    UnsupportedAlgorithm,

    /// Declared key length does not match the public key modulus
    #[error("Key length mismatch: declared {declared} bits, modulus has {actual} bits")]
    KeyLengthMismatch {
        /// Bits implied by the instruction's key length field
        declared: usize,
        /// Exact bit length of the decoded modulus
        actual: usize,
    },

    /// Modulus is zero, even, or otherwise unusable
    #[error("Invalid modulus")]
    InvalidModulus,

    /// Public exponent is even, below 3, or wider than the modulus
    #[error("Invalid public exponent")]
    InvalidPublicExponent,
}

/// Requests the wire format cannot represent.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Field longer than its `u32` length prefix allows
    #[error("Field {field} too long for the wire format: {len} bytes")]
    FieldTooLong { field: &'static str, len: usize },
}

/// Errors raised by the big-integer module.
///
/// These never leave the crate boundary as-is: the orchestrator maps them
/// either to [`DecodeError::InvalidModulus`] (key validation) or to a
/// rejected verification (signature out of range).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Modulus is zero, one or even
    #[error("Invalid modulus")]
    InvalidModulus,

    /// Operand wider than the supported capacity or not below the modulus
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

impl From<ArithmeticError> for DecodeError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::InvalidModulus => DecodeError::InvalidModulus,
            ArithmeticError::ArithmeticOverflow => DecodeError::MalformedInstruction,
        }
    }
}

/// Errors from the verify-then-authorize flow.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorizeError {
    /// Instruction could not be decoded
    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// Signature did not verify; the host action was not attempted
    #[error("Signature rejected")]
    SignatureRejected,

    /// Signature verified but the host refused or failed the action
    #[error("Authorization failed: {0}")]
    AuthorizationFailed(String),
}
