//! `[validate]` section configuration.
//!
//! Duplicate sources, loops and cycles are always errors. Chains and
//! destinations outside the live path set are warnings unless raised here.
//!
//! # Example
//!
//! ```toml
//! [validate]
//! cycles = true               # Detect cycles longer than two hops
//!
//! [validate.chains]
//! level = "warn"              # Failure level: error | warn
//!
//! [validate.targets]
//! enable = true               # Check destinations against [site] paths
//! level = "warn"              # Failure level: error | warn
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Walk full redirect paths to find cycles longer than two hops.
    pub cycles: bool,

    /// One-hop chain reporting.
    pub chains: ChainsValidateConfig,

    /// Destination-in-site-paths checks.
    pub targets: TargetsValidateConfig,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            cycles: true,
            chains: ChainsValidateConfig::default(),
            targets: TargetsValidateConfig::default(),
        }
    }
}

impl ValidateConfig {
    /// Escalate every advisory check to an error.
    pub fn make_strict(&mut self) {
        self.chains.level = ValidateLevel::Error;
        self.targets.level = ValidateLevel::Error;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainsValidateConfig {
    /// How to treat chains: "error" or "warn".
    pub level: ValidateLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetsValidateConfig {
    /// Enable destination checks.
    pub enable: bool,

    /// How to treat unknown destinations: "error" or "warn".
    pub level: ValidateLevel,
}

impl Default for TargetsValidateConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: ValidateLevel::default(),
        }
    }
}

/// Validation finding level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Blocks deployment (validation fails).
    Error,
    /// Advisory only.
    #[default]
    Warn,
}
