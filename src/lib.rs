//! keyprops - Release signing config resolver for Android builds.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── resolve       # Print the resolved signing config
//! │   ├── plan          # Print the release build plan
//! │   ├── check         # Strict evaluation plus keystore check
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── properties    # key.properties parsing
//!     ├── signing       # Signing config resolution
//!     ├── host          # Host SDK values
//!     ├── config        # keyprops.toml management
//!     └── plan          # Release build plan
//! ```
//!
//! # Example
//!
//! ```no_run
//! use keyprops::core::signing::{self, ResolveMode};
//! use std::path::Path;
//!
//! let config = signing::resolve(Path::new("android"), ResolveMode::Strict)?;
//! println!("{:?}", config.key_alias());
//! # Ok::<(), keyprops::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::ProjectConfig;
pub use crate::core::plan::BuildPlan;
pub use crate::core::properties::Properties;
pub use crate::core::signing::{resolve, ResolveMode, SigningConfig};
