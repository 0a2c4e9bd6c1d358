//! # Verification Benchmarks
//!
//! Measures the cost of each pipeline stage:
//! - Montgomery exponentiation with e = 65537 per key length
//! - Full instruction verification (decode + DER + digest + modpow + compare)
//! - Parallel batch verification throughput
//!
//! Stress conditions:
//! - 4096-bit keys
//! - Mixed valid/invalid batches

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use rsa_signature_verification::domain::bigint::{BigUint, MontgomeryModulus};
use rsa_signature_verification::{
    HashAlgorithm, RsaPublicKey, RsaVerificationApi, RsaVerifier, VerifierConfig,
};

use rsa_signature_verification::domain::test_helpers as signer;
use crate::vectors::{self, MESSAGE};

pub fn bench_modpow(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsa/modpow");

    for vector in vectors::ALL {
        let key = RsaPublicKey::from_der(&vector.pubkey()).expect("vector key");
        let modulus = MontgomeryModulus::from_be_bytes(key.modulus()).expect("odd modulus");
        let signature = BigUint::from_be_bytes(&vector.signature()).expect("signature fits");

        group.bench_with_input(
            BenchmarkId::new("e65537", vector.key_length.bits()),
            &signature,
            |b, signature| b.iter(|| black_box(modulus.modpow(signature, key.exponent()))),
        );
    }

    group.finish();
}

pub fn bench_verify_instruction(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsa/verify_instruction");
    let verifier = RsaVerifier::new(VerifierConfig::production());

    for vector in vectors::ALL {
        let data = vector.instruction(MESSAGE);
        group.bench_with_input(
            BenchmarkId::new("sha256", vector.key_length.bits()),
            &data,
            |b, data| b.iter(|| black_box(verifier.verify_instruction(data))),
        );
    }

    // Digest choice on a larger message
    let message = vec![0x5a; 16 * 1024];
    for hash in [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Blake3,
    ] {
        let data = signer::rsa2048().instruction(hash, &message);
        group.bench_with_input(
            BenchmarkId::new(format!("{hash:?}_16KiB"), 2048),
            &data,
            |b, data| b.iter(|| black_box(verifier.verify_instruction(data))),
        );
    }

    group.finish();
}

pub fn bench_batch_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsa/batch_verify");
    group.measurement_time(Duration::from_secs(10));

    let verifier = RsaVerifier::new(VerifierConfig::production());
    let good = vectors::RSA2048.instruction(MESSAGE);
    let bad = vectors::RSA2048.instruction(b"forged");

    for size in [10usize, 100, 500] {
        // Every fourth instruction is invalid
        let batch: Vec<&[u8]> = (0..size)
            .map(|i| if i % 4 == 3 { bad.as_slice() } else { good.as_slice() })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("rsa2048_mixed", size), &batch, |b, batch| {
            b.iter(|| black_box(verifier.batch_verify(batch)))
        });
    }

    group.finish();
}
