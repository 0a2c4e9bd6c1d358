//! # PKCS#1 v1.5 Signature Encoding
//!
//! Reconstructs the expected encoded message (RFC 8017 §9.2, EMSA-PKCS1-v1_5)
//! and compares it against the one recovered from the signature.
//!
//! ```text
//! EM = 0x00 || 0x01 || PS (0xFF, at least 8 bytes) || 0x00 || T
//! ```
//!
//! `T` depends on the algorithm:
//!
//! | Algorithm | T |
//! |-----------|---|
//! | SHA-256   | DigestInfo(sha256) \|\| digest |
//! | SHA3-256  | DigestInfo(sha3-256) \|\| digest |
//! | BLAKE3    | digest (non-standard: no registered OID) |
//! | NAIVE     | message (non-standard: no hashing, no OID) |
//!
//! The BLAKE3 and NAIVE rows are extensions outside RFC 8017. Signers must
//! produce them with a raw ("unprefixed") PKCS#1 v1.5 signing primitive.
//!
//! Verification returns a bare `bool`: every way of failing looks the same
//! to the caller.

use super::bigint::ct_eq;
use super::entities::HashAlgorithm;

/// DER DigestInfo prefix for SHA-256 (OID 2.16.840.1.101.3.4.2.1).
pub const SHA256_DIGEST_INFO: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01, 0x05,
    0x00, 0x04, 0x20,
];

/// DER DigestInfo prefix for SHA3-256 (OID 2.16.840.1.101.3.4.2.8).
pub const SHA3_256_DIGEST_INFO: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x08, 0x05,
    0x00, 0x04, 0x20,
];

/// Minimum padding string length required by RFC 8017.
pub const MIN_PADDING_LEN: usize = 8;

/// Bytes of framing around `T`: leading 0x00 0x01 and the 0x00 separator.
const FRAMING_LEN: usize = 3;

/// DigestInfo prefix for `algorithm`, empty where none is defined.
pub fn digest_info_prefix(algorithm: HashAlgorithm) -> &'static [u8] {
    match algorithm {
        HashAlgorithm::Sha256 => &SHA256_DIGEST_INFO,
        HashAlgorithm::Sha3_256 => &SHA3_256_DIGEST_INFO,
        HashAlgorithm::Blake3 | HashAlgorithm::Naive => &[],
    }
}

/// Build the expected encoded message of `k` bytes for `digest`.
///
/// Returns `None` when `T` does not fit with at least [`MIN_PADDING_LEN`]
/// padding bytes, or when `digest` has the wrong length for `algorithm`.
pub fn encode_expected(algorithm: HashAlgorithm, digest: &[u8], k: usize) -> Option<Vec<u8>> {
    if let Some(len) = algorithm.digest_len() {
        if digest.len() != len {
            return None;
        }
    }

    let prefix = digest_info_prefix(algorithm);
    let t_len = prefix.len() + digest.len();
    let padding_len = k.checked_sub(t_len + FRAMING_LEN)?;
    if padding_len < MIN_PADDING_LEN {
        return None;
    }

    let mut em = Vec::with_capacity(k);
    em.extend_from_slice(&[0x00, 0x01]);
    em.resize(2 + padding_len, 0xff);
    em.push(0x00);
    em.extend_from_slice(prefix);
    em.extend_from_slice(digest);
    Some(em)
}

/// Check a recovered encoded message against `digest`.
///
/// `recovered` must already be left-padded to the modulus length.
pub fn verify(recovered: &[u8], algorithm: HashAlgorithm, digest: &[u8]) -> bool {
    match encode_expected(algorithm, digest, recovered.len()) {
        Some(expected) => ct_eq(recovered, &expected),
        None => false,
    }
}
