//! # Verifier Configuration
//!
//! Policy and resource limits for the verification service.
//!
//! ## Security Requirements
//!
//! - NAIVE is never verified under the production profile: the NAIVE mode
//!   signs the raw message and gives no collision resistance. Setting
//!   `allow_naive_hash` there is also a validation error.
//! - All limits have sane defaults with environment override capability.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::HashAlgorithm;

/// Default maximum instruction size accepted by the host entrypoint.
///
/// Large enough for a 4096-bit SPKI key, a 512-byte signature and a
/// generous message.
pub const DEFAULT_MAX_INSTRUCTION_LEN: usize = 64 * 1024;

/// Default maximum number of instructions per batch (DoS protection).
pub const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

/// Deployment profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentProfile {
    /// Local testing; unsafe modes may be enabled
    #[default]
    Development,
    /// Production; unsafe modes are refused
    Production,
}

/// Verifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Deployment profile.
    pub profile: DeploymentProfile,
    /// Accept instructions using [`HashAlgorithm::Naive`].
    pub allow_naive_hash: bool,
    /// Maximum raw instruction size in bytes.
    pub max_instruction_len: usize,
    /// Maximum instructions per batch.
    pub max_batch_size: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            profile: DeploymentProfile::Development,
            allow_naive_hash: true,
            max_instruction_len: DEFAULT_MAX_INSTRUCTION_LEN,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

impl VerifierConfig {
    /// Production defaults: NAIVE hashing disabled.
    pub fn production() -> Self {
        Self {
            profile: DeploymentProfile::Production,
            allow_naive_hash: false,
            ..Self::default()
        }
    }

    /// Whether `algorithm` may be verified under this configuration.
    ///
    /// The production profile refuses NAIVE whatever `allow_naive_hash` says.
    pub fn is_algorithm_allowed(&self, algorithm: HashAlgorithm) -> bool {
        algorithm.is_production_safe()
            || (self.allow_naive_hash && self.profile != DeploymentProfile::Production)
    }

    /// Validate configuration for production readiness.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - NAIVE hashing is enabled under the production profile
    /// - a limit is zero
    pub fn validate_for_production(&self) -> Result<(), ConfigError> {
        if self.profile == DeploymentProfile::Production && self.allow_naive_hash {
            return Err(ConfigError::NaiveHashInProduction);
        }
        self.validate_limits()
    }

    fn validate_limits(&self) -> Result<(), ConfigError> {
        if self.max_instruction_len == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_instruction_len",
                value: "0".to_string(),
            });
        }
        if self.max_batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_batch_size",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment overrides on top of `self`.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `RSA_VERIFY_PROFILE` | `profile` (`development` / `production`) |
    /// | `RSA_VERIFY_ALLOW_NAIVE` | `allow_naive_hash` (`true` / `false`) |
    /// | `RSA_VERIFY_MAX_INSTRUCTION_LEN` | `max_instruction_len` |
    /// | `RSA_VERIFY_MAX_BATCH` | `max_batch_size` |
    ///
    /// Selecting the production profile turns NAIVE off unless
    /// `RSA_VERIFY_ALLOW_NAIVE` is also set (which then fails validation).
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Configuration from defaults plus environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("RSA_VERIFY_PROFILE") {
            self.profile = match value.to_ascii_lowercase().as_str() {
                "development" | "dev" => DeploymentProfile::Development,
                "production" | "prod" => {
                    self.allow_naive_hash = false;
                    DeploymentProfile::Production
                }
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "RSA_VERIFY_PROFILE",
                        value,
                    })
                }
            };
        }
        if let Some(value) = lookup("RSA_VERIFY_ALLOW_NAIVE") {
            self.allow_naive_hash = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "RSA_VERIFY_ALLOW_NAIVE",
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup("RSA_VERIFY_MAX_INSTRUCTION_LEN") {
            self.max_instruction_len = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "RSA_VERIFY_MAX_INSTRUCTION_LEN",
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup("RSA_VERIFY_MAX_BATCH") {
            self.max_batch_size = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "RSA_VERIFY_MAX_BATCH",
                value: value.clone(),
            })?;
        }
        Ok(self)
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// NAIVE hashing enabled under the production profile.
    #[error(
        "SECURITY VIOLATION: NAIVE hash mode is enabled in the production profile. \
         Unset RSA_VERIFY_ALLOW_NAIVE or use the development profile."
    )]
    NaiveHashInProduction,

    /// A setting could not be parsed or is out of range.
    #[error("Invalid configuration value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
