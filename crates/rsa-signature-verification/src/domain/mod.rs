//! # Domain Layer
//!
//! Pure decoding and cryptographic logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod bigint;
pub mod der;
pub mod digest;
pub mod entities;
pub mod errors;
pub mod pkcs1;
pub mod wire;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_helpers;
