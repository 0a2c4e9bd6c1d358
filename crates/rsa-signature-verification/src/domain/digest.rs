//! # Digest Engine
//!
//! Dispatches the message digest for each supported [`HashAlgorithm`].
//!
//! ## Security Notes
//!
//! - SHA-256 (`sha2`), SHA3-256 (`sha3`) and BLAKE3 (`blake3`) all produce
//!   32-byte digests.
//! - [`HashAlgorithm::Naive`] returns the message unchanged. It offers no
//!   collision resistance at all and exists only for tests and legacy
//!   callers; production profiles refuse it (see [`crate::config`]).

use sha2::Sha256;
use sha3::{Digest, Sha3_256};

use super::entities::HashAlgorithm;
use super::errors::DecodeError;

/// Digest `message` with `algorithm`.
pub fn digest(algorithm: HashAlgorithm, message: &[u8]) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Naive => message.to_vec(),
        HashAlgorithm::Sha256 => sha256(message).to_vec(),
        HashAlgorithm::Sha3_256 => sha3_256(message).to_vec(),
        HashAlgorithm::Blake3 => blake3_256(message).to_vec(),
    }
}

/// Digest `message` with the algorithm named by a raw wire selector.
pub fn digest_with_selector(selector: u8, message: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let algorithm = HashAlgorithm::try_from(selector)?;
    Ok(digest(algorithm, message))
}

/// SHA-256.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// SHA3-256 (FIPS 202, not legacy Keccak).
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// BLAKE3 with the default 32-byte output.
pub fn blake3_256(data: &[u8]) -> [u8; 32] {
    *blake3::hash(data).as_bytes()
}
