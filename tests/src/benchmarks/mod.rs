//! # RSA Verification Benchmarks
//!
//! Criterion benchmark bodies, registered by `benches/verification_benchmarks.rs`.

pub mod verification;
