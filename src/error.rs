//! Error types for keyprops.
//!
//! Each concern gets its own error enum; [`Error`] wraps them so library
//! functions can share a single [`Result`] alias.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading `keyprops.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read keyprops.toml: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse keyprops.toml: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors raised while resolving or checking the release signing config.
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing signing {}", describe_fields(.fields))]
    MissingField { fields: Vec<&'static str> },

    #[error("invalid path for {field}: value is empty")]
    InvalidPath { field: &'static str },

    #[error("keystore not found: {0}")]
    KeystoreNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;

fn describe_fields(fields: &[&'static str]) -> String {
    let noun = if fields.len() == 1 { "field" } else { "fields" };
    format!("{}: {}", noun, fields.join(", "))
}
