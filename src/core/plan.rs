//! Release build plan.
//!
//! Evaluates the project once: resolves the signing config and binds it to
//! the `release` build type next to the injected host SDK values.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::config::{AppIdentity, ProjectConfig};
use crate::core::constants;
use crate::core::host::HostSdk;
use crate::core::signing::{self, ResolveMode, SigningConfig, SigningSummary};
use crate::error::{Result, SigningError};

/// A named build type with its signing config and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildType {
    pub name: String,
    pub signing: SigningConfig,
    pub minify_enabled: bool,
    pub shrink_resources: bool,
}

/// Everything the build pipeline needs for a release build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    mode: ResolveMode,
    pub app: AppIdentity,
    pub host: HostSdk,
    pub release: BuildType,
}

/// Result of a successful [`BuildPlan::check`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub keystore: PathBuf,
    pub keystore_sha256: String,
    pub keystore_bytes: u64,
}

impl BuildPlan {
    /// Evaluate the release build plan for the project at `root`.
    ///
    /// In strict mode the release variant must be fully signed, so an absent
    /// `key.properties` is rejected here even though the resolver itself
    /// accepts it.
    ///
    /// # Errors
    ///
    /// Returns any error from signing resolution, or
    /// `SigningError::MissingField` in strict mode when the release signing
    /// config is incomplete.
    pub fn evaluate(root: &Path, config: &ProjectConfig, mode: ResolveMode) -> Result<Self> {
        debug!(root = %root.display(), %mode, "evaluating build plan");

        let signing = signing::resolve(root, mode)?;
        if mode == ResolveMode::Strict {
            signing.ensure_complete()?;
        }

        Ok(Self {
            mode,
            app: config.app.clone(),
            host: config.host.clone(),
            release: BuildType {
                name: constants::RELEASE_VARIANT.to_string(),
                signing,
                minify_enabled: config.release.minify_enabled,
                shrink_resources: config.release.shrink_resources,
            },
        })
    }

    /// Mode used for signing resolution
    pub fn mode(&self) -> ResolveMode {
        self.mode
    }

    /// Verify that the release keystore is usable.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::MissingField` if the signing config is
    /// incomplete, `SigningError::KeystoreNotFound` if the keystore is not a
    /// regular file, or `SigningError::ReadFile` if it cannot be read.
    pub fn check(&self) -> Result<CheckReport> {
        let keystore = self.release.signing.complete()?.store_file;

        if !keystore.is_file() {
            return Err(SigningError::KeystoreNotFound(keystore.to_path_buf()).into());
        }

        let bytes = std::fs::read(keystore).map_err(|source| SigningError::ReadFile {
            path: keystore.to_path_buf(),
            source,
        })?;
        debug!(path = %keystore.display(), size = bytes.len(), "keystore read");

        Ok(CheckReport {
            keystore: keystore.to_path_buf(),
            keystore_sha256: hex_digest(&bytes),
            keystore_bytes: bytes.len() as u64,
        })
    }

    /// Redacted, serializable view for display.
    pub fn summary(&self) -> PlanSummary<'_> {
        PlanSummary {
            mode: self.mode,
            app: &self.app,
            host: &self.host,
            variant: &self.release.name,
            minify_enabled: self.release.minify_enabled,
            shrink_resources: self.release.shrink_resources,
            signing: self.release.signing.summary(),
        }
    }
}

/// Display form of a [`BuildPlan`].
#[derive(Debug, Serialize)]
pub struct PlanSummary<'a> {
    pub mode: ResolveMode,
    pub app: &'a AppIdentity,
    pub host: &'a HostSdk,
    pub variant: &'a str,
    pub minify_enabled: bool,
    pub shrink_resources: bool,
    pub signing: SigningSummary,
}

fn hex_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}
