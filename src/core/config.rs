//! Project configuration.
//!
//! Handles reading and validating the optional `keyprops.toml` at the project
//! root. Every section has defaults, so a project without the file behaves
//! like a stock Android app module.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::host::HostSdk;
use crate::core::signing::ResolveMode;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `keyprops.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Application identity
    pub app: AppIdentity,
    /// Values supplied by the host build plugin
    pub host: HostSdk,
    /// Release build type flags
    pub release: ReleaseFlags,
    /// Signing resolution settings
    pub signing: SigningSettings,
}

/// Application identity of the Android module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppIdentity {
    /// Kotlin/Java namespace of generated sources
    pub namespace: String,
    /// Package name published to the store
    pub application_id: String,
    /// Java source/target compatibility and JVM target
    pub java_target: String,
}

impl Default for AppIdentity {
    fn default() -> Self {
        Self {
            namespace: "com.example.app".to_string(),
            application_id: "com.example.app".to_string(),
            java_target: "11".to_string(),
        }
    }
}

/// Flags of the release build type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseFlags {
    /// Run code shrinking/obfuscation
    pub minify_enabled: bool,
    /// Strip unused resources (requires `minify_enabled`)
    pub shrink_resources: bool,
}

/// `[signing]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SigningSettings {
    pub mode: ResolveMode,
}

impl ProjectConfig {
    /// Path to the configuration file under `root`
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(constants::CONFIG_FILE)
    }

    /// Load configuration from `root/keyprops.toml`, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be read,
    /// `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::config_path(root);
        debug!(path = %path.display(), "loading config");

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::ReadFile(e).into()),
        };

        let config = Self::from_toml(&contents)?;
        debug!(
            application_id = %config.app.application_id,
            mode = %config.signing.mode,
            "config loaded"
        );
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or `ConfigError::InvalidValue`.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration contents
    ///
    /// Checks:
    /// - Namespace and application id are non-empty
    /// - Resource shrinking is only enabled together with minification
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.app.namespace.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "app.namespace",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if self.app.application_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "app.application_id",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if self.release.shrink_resources && !self.release.minify_enabled {
            return Err(ConfigError::InvalidValue {
                field: "release.shrink_resources",
                reason: "resource shrinking requires minify_enabled = true".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
