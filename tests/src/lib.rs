//! # RSA Verification Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── vectors.rs        # Fixed known-answer vectors (512 to 4096 bits)
//! ├── benchmarks/       # Criterion benchmark bodies
//! └── integration/      # End-to-end flows and properties
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p rsa-tests
//!
//! # By category
//! cargo test -p rsa-tests integration::vectors::
//! cargo test -p rsa-tests integration::properties::
//!
//! # Benchmarks
//! cargo bench -p rsa-tests
//! ```

pub mod benchmarks;
pub mod integration;
pub mod vectors;
