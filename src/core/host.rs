//! Host SDK settings.
//!
//! Values the host build plugin supplies to the Android build. They are
//! injected into the build plan as plain data and passed through untouched.

use serde::{Deserialize, Serialize};

/// SDK and version numbers supplied by the host build plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostSdk {
    pub compile_sdk: u32,
    pub min_sdk: u32,
    pub target_sdk: u32,
    pub version_code: u32,
    pub version_name: String,
}

impl Default for HostSdk {
    fn default() -> Self {
        Self {
            compile_sdk: 35,
            min_sdk: 21,
            target_sdk: 35,
            version_code: 1,
            version_name: "1.0.0".to_string(),
        }
    }
}
