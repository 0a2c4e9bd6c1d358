//! # RSA Signature Verification
//!
//! Verifies RSA PKCS#1 v1.5 signatures carried in a compact binary
//! instruction, for 512 to 4096-bit keys and four digest modes.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Wire codec, DER keys, digests, big-integer
//!   arithmetic and PKCS#1 encoding; pure, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//! - **Adapters** (`adapters/`): Host entrypoint with stable result codes
//!
//! ## Example
//!
//! ```no_run
//! use rsa_signature_verification::{RsaVerificationApi, RsaVerifier, VerifierConfig};
//!
//! let verifier = RsaVerifier::new(VerifierConfig::production());
//! let instruction: Vec<u8> = std::fs::read("instruction.bin").unwrap();
//! match verifier.verify_instruction(&instruction) {
//!     Ok(outcome) if outcome.is_accepted() => println!("accepted"),
//!     Ok(_) => println!("rejected"),
//!     Err(e) => println!("malformed: {e}"),
//! }
//! ```
//!
//! ## Security Notes
//!
//! - **No failure oracle**: once an instruction decodes, every failure is a
//!   bare `Rejected`
//! - **Full comparison**: the whole recovered encoded message is compared in
//!   constant time, not just the digest
//! - **NAIVE mode**: the pass-through digest offers no collision resistance
//!   and is refused by the production profile

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::entrypoint::{codes, result_code, HostError, InstructionHandler};
pub use config::{ConfigError, DeploymentProfile, VerifierConfig};
pub use domain::der::RsaPublicKey;
pub use domain::digest::{digest, digest_with_selector};
pub use domain::entities::{
    BatchVerificationResult, HashAlgorithm, KeyLength, VerificationOutcome, VerificationRequest,
};
pub use domain::errors::{ArithmeticError, AuthorizeError, DecodeError, EncodeError};
pub use domain::wire::{decode, encode, RsaSignatureInstruction, PROGRAM_ID};
pub use ports::inbound::RsaVerificationApi;
pub use ports::outbound::{AuthorizationError, AuthorizationGateway};
pub use service::{RsaVerificationService, RsaVerifier};
