//! # Integration Tests
//!
//! End-to-end checks through the public API only.

pub mod properties;
