//! Fuzz target for end-to-end instruction verification.
//!
//! Builds structurally valid instructions from fuzzed parts so the fuzzer
//! reaches the DER parser and the modular exponentiation, not just the
//! length checks.
//!
//! ## Running
//!
//! ```bash
//! cd crates/rsa-signature-verification
//! cargo +nightly fuzz run fuzz_verify_instruction
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use rsa_signature_verification::{
    HashAlgorithm, KeyLength, RsaSignatureInstruction, RsaVerificationApi, RsaVerifier,
    VerifierConfig,
};

/// Fuzz input structure for instruction verification.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    /// Index into the supported key lengths
    key_length: u8,
    /// Index into the supported hash algorithms
    hash: u8,
    /// Signed message
    message: Vec<u8>,
    /// Signature bytes, stretched or cut to the modulus length
    signature: Vec<u8>,
    /// DER public key candidate
    pubkey: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let key_length = KeyLength::ALL[input.key_length as usize % KeyLength::ALL.len()];
    let hash = HashAlgorithm::ALL[input.hash as usize % HashAlgorithm::ALL.len()];

    let mut signature = input.signature;
    signature.resize(key_length.modulus_len(), 0);

    let data = RsaSignatureInstruction::new(
        key_length,
        hash,
        &input.message,
        &signature,
        &input.pubkey,
    )
    .to_bytes()
    .unwrap();

    let verifier = RsaVerifier::new(VerifierConfig::default());

    // Verify - this should NEVER panic, regardless of input
    let result = verifier.verify_instruction(&data);

    // Result should be deterministic
    assert_eq!(result, verifier.verify_instruction(&data));
});
