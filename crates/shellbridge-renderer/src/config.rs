//! Bridge configuration.

use serde::{Deserialize, Serialize};

use crate::error::BridgeResult;

/// Default for [`BridgeConfig::pending_warn_threshold`].
pub const DEFAULT_PENDING_WARN_THRESHOLD: usize = 1024;

/// Configuration for a [`RendererBridge`](crate::RendererBridge).
///
/// Every field has a working default, so a bare config section (or
/// [`BridgeConfig::default`]) produces a functional bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Name the extension surface is registered under with the engine.
    pub extension_name: String,
    /// Log a warning once this many callbacks are pending. Callbacks the
    /// host never answers are leaked by design (there is no timeout), so
    /// sustained growth here means replies are going missing.
    pub pending_warn_threshold: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            extension_name: "shellbridge".to_owned(),
            pending_warn_threshold: DEFAULT_PENDING_WARN_THRESHOLD,
        }
    }
}

impl BridgeConfig {
    /// Parse a config from TOML.
    ///
    /// # Errors
    ///
    /// [`BridgeError::Config`](crate::BridgeError::Config) if the TOML is
    /// malformed.
    pub fn from_toml_str(raw: &str) -> BridgeResult<Self> {
        Ok(toml::from_str(raw)?)
    }
}
