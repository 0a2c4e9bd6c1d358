//! Fuzz target for the instruction wire decoder.
//!
//! Arbitrary bytes must either fail to decode or re-encode to exactly the
//! same bytes.
//!
//! ## Running
//!
//! ```bash
//! cd crates/rsa-signature-verification
//! cargo +nightly fuzz run fuzz_wire_decode
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use rsa_signature_verification::{decode, encode};

fuzz_target!(|data: &[u8]| {
    // Decode - this should NEVER panic, regardless of input
    if let Ok(request) = decode(data) {
        // Encoding is the exact inverse of a successful decode
        assert_eq!(encode(&request).unwrap(), data);
        assert_eq!(request.signature.len(), request.key_length.modulus_len());
    }
});
