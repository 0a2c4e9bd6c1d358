//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that hosts and clients call
//! - **Outbound (Driven)**: The host action a verified signature unlocks

pub mod inbound;
pub mod outbound;
