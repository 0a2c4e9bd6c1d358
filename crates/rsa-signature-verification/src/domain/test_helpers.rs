//! Shared fixtures: an RSA signer backed by the `rsa` crate and fixed
//! known-answer vectors.
//!
//! Compiled for unit tests and, through the `test-utils` feature, for the
//! workspace test crate and benchmarks.

use std::sync::OnceLock;

use rsa::pkcs1::EncodeRsaPublicKey;
use rsa::pkcs8::EncodePublicKey;
use rsa::sha2::Sha256;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};

use super::digest::{blake3_256, sha256, sha3_256};
use super::entities::{HashAlgorithm, KeyLength, VerificationRequest};
use super::pkcs1::SHA3_256_DIGEST_INFO;
use super::wire::RsaSignatureInstruction;

/// RSA-512, SHA-256 over `b"hello"`: (signature, SubjectPublicKeyInfo DER).
pub const RSA512_HELLO: (&str, &str) = (
    "05069a2ac8e8166eda881d3262a4f72a4a2c0d92d5d94f1ecbb6ba533020cd9dd5c6ffe3d884e9da0e03b8595531da272e33785bdb0597fa9ce09c876fb758c6",
    "305c300d06092a864886f70d0101010500034b003048024100ccbe3c1bc37a17e5e2701090cb92add0094b657d148a1c66fac8a4a846d953f3bf84b1b228c8d46a567c69da677288668f7bb21c5bcb095148d0f2b48c6947590203010001",
);

/// RSA-1024, SHA-256 over `b"hello"`: (signature, SubjectPublicKeyInfo DER).
pub const RSA1024_HELLO: (&str, &str) = (
    "848e10e5546a41a7b507fe8bbe1a3679f3e5759f13819df5702f38a43cf9501a6911a2a6207b115a6fc441b209bbddea0b577f6b7d6f9b4be1e48efae2a3866cca6a2bc8d1917c7d58cfc626877f4f8dc8cbdd171fc72d8b0dc7eebffeecf711da76c475ae3477ade41d18fffbb113a60b2472dd91db1e792eaab0f6b358cc64",
    "30819f300d06092a864886f70d010101050003818d0030818902818100a7b20fae4bd6b224e4d1ca7830a4c7197d3c94609b418cff37226699acff34f4bfdff94f1f1bf7bbcd4ebf1e0fc25fc657d7ae04cb2377e7623805ef462a51a841c4d6943ce117242a1b309c776de1f640b0c23efed4a08388a14f41b119a72684d9720b06ee56a90838517e1871e579250fbc51d63c7b27573267ecea6aeb230203010001",
);

/// Encoded instruction for a fixed vector.
pub fn vector_instruction(key_length: KeyLength, vector: (&str, &str), message: &[u8]) -> Vec<u8> {
    RsaSignatureInstruction::new(
        key_length,
        HashAlgorithm::Sha256,
        message,
        &hex::decode(vector.0).expect("vector signature hex"),
        &hex::decode(vector.1).expect("vector pubkey hex"),
    )
    .to_bytes()
    .expect("vector fits the wire format")
}

/// RSA private key plus the key length it was generated for.
pub struct TestSigner {
    key: RsaPrivateKey,
    key_length: KeyLength,
}

/// Shared RSA-1024 signer (generation is slow).
pub fn rsa1024() -> &'static TestSigner {
    static SIGNER: OnceLock<TestSigner> = OnceLock::new();
    SIGNER.get_or_init(|| TestSigner::generate(KeyLength::Rsa1024))
}

/// Shared RSA-2048 signer.
pub fn rsa2048() -> &'static TestSigner {
    static SIGNER: OnceLock<TestSigner> = OnceLock::new();
    SIGNER.get_or_init(|| TestSigner::generate(KeyLength::Rsa2048))
}

impl TestSigner {
    pub fn generate(key_length: KeyLength) -> Self {
        let key = RsaPrivateKey::new(&mut rand::thread_rng(), key_length.bits())
            .expect("RSA key generation");
        Self { key, key_length }
    }

    /// PKCS#1 `RSAPublicKey` DER.
    pub fn pkcs1_der(&self) -> Vec<u8> {
        self.key
            .to_public_key()
            .to_pkcs1_der()
            .expect("PKCS#1 encoding")
            .into_vec()
    }

    /// SubjectPublicKeyInfo DER.
    pub fn spki_der(&self) -> Vec<u8> {
        self.key
            .to_public_key()
            .to_public_key_der()
            .expect("SPKI encoding")
            .into_vec()
    }

    /// PKCS#1 v1.5 signature in the framing each algorithm expects.
    pub fn sign(&self, hash: HashAlgorithm, message: &[u8]) -> Vec<u8> {
        let result = match hash {
            HashAlgorithm::Sha256 => self.key.sign(Pkcs1v15Sign::new::<Sha256>(), &sha256(message)),
            HashAlgorithm::Sha3_256 => {
                let mut t = SHA3_256_DIGEST_INFO.to_vec();
                t.extend_from_slice(&sha3_256(message));
                self.key.sign(Pkcs1v15Sign::new_unprefixed(), &t)
            }
            HashAlgorithm::Blake3 => self
                .key
                .sign(Pkcs1v15Sign::new_unprefixed(), &blake3_256(message)),
            HashAlgorithm::Naive => self.key.sign(Pkcs1v15Sign::new_unprefixed(), message),
        };
        result.expect("PKCS#1 v1.5 signing")
    }

    pub fn request(&self, hash: HashAlgorithm, message: &[u8]) -> VerificationRequest {
        VerificationRequest::new(
            self.key_length,
            hash,
            message,
            &self.sign(hash, message),
            &self.spki_der(),
        )
    }

    /// Wire-encoded instruction carrying the SPKI form of the key.
    pub fn instruction(&self, hash: HashAlgorithm, message: &[u8]) -> Vec<u8> {
        RsaSignatureInstruction::new(
            self.key_length,
            hash,
            message,
            &self.sign(hash, message),
            &self.spki_der(),
        )
        .to_bytes()
        .expect("instruction fits the wire format")
    }
}
