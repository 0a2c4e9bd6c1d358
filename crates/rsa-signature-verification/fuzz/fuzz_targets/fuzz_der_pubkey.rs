//! Fuzz target for the DER public key parser.
//!
//! ## Running
//!
//! ```bash
//! cd crates/rsa-signature-verification
//! cargo +nightly fuzz run fuzz_der_pubkey
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use rsa::pkcs1::EncodeRsaPublicKey;
use rsa::pkcs8::EncodePublicKey;
use rsa_signature_verification::RsaPublicKey;

fuzz_target!(|data: &[u8]| {
    if let Ok(key) = RsaPublicKey::from_der(data) {
        // Accepted keys survive PKCS#1 and SPKI round trips unchanged
        let pkcs1 = key.to_pkcs1_der().unwrap();
        assert_eq!(RsaPublicKey::from_der(pkcs1.as_bytes()).unwrap(), key);
        let spki = key.to_public_key_der().unwrap();
        assert_eq!(RsaPublicKey::from_der(spki.as_bytes()).unwrap(), key);
        assert!(key.bits() <= 4096);
    }
});
