//! Release signing config resolution.
//!
//! Reads `key.properties` from the project root and turns its four signing
//! keys into a [`SigningConfig`]. A missing file is a valid state and yields
//! an empty config. What happens to missing keys depends on [`ResolveMode`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::constants::{self, KEY_ALIAS, KEY_PASSWORD, STORE_FILE, STORE_PASSWORD};
use crate::core::properties::Properties;
use crate::error::{Result, SigningError};

/// How to treat gaps in the signing properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    /// Absent keys become `None`; an empty `storeFile` is left unresolved.
    Lenient,
    /// Absent keys and an empty `storeFile` are errors.
    #[default]
    Strict,
}

impl fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Credentials used to sign the release variant.
///
/// Passwords are wiped from memory on drop and never printed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SigningConfig {
    key_alias: Option<String>,
    key_password: Option<Zeroizing<String>>,
    store_file: Option<PathBuf>,
    store_password: Option<Zeroizing<String>>,
}

impl SigningConfig {
    /// Build a config from already-resolved parts.
    pub fn new(
        key_alias: Option<String>,
        key_password: Option<String>,
        store_file: Option<PathBuf>,
        store_password: Option<String>,
    ) -> Self {
        Self {
            key_alias,
            key_password: key_password.map(Zeroizing::new),
            store_file,
            store_password: store_password.map(Zeroizing::new),
        }
    }

    /// Alias of the signing key inside the keystore
    pub fn key_alias(&self) -> Option<&str> {
        self.key_alias.as_deref()
    }

    /// Password of the signing key
    pub fn key_password(&self) -> Option<&str> {
        self.key_password.as_ref().map(|p| p.as_str())
    }

    /// Keystore path, resolved against the project root
    pub fn store_file(&self) -> Option<&Path> {
        self.store_file.as_deref()
    }

    /// Password of the keystore
    pub fn store_password(&self) -> Option<&str> {
        self.store_password.as_ref().map(|p| p.as_str())
    }

    /// Property names of the fields that are unset, in canonical order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.key_alias.is_none() {
            missing.push(KEY_ALIAS);
        }
        if self.key_password.is_none() {
            missing.push(KEY_PASSWORD);
        }
        if self.store_file.is_none() {
            missing.push(STORE_FILE);
        }
        if self.store_password.is_none() {
            missing.push(STORE_PASSWORD);
        }
        missing
    }

    /// Whether all four fields are set.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.missing_fields().len() == constants::SIGNING_KEYS.len()
    }

    /// Fail unless every field is set.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::MissingField` naming every unset field.
    pub fn ensure_complete(&self) -> Result<()> {
        self.complete().map(|_| ())
    }

    /// Borrow all four fields, or fail naming the unset ones.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::MissingField` naming every unset field.
    pub fn complete(&self) -> Result<CompleteSigning<'_>> {
        match (
            self.key_alias(),
            self.key_password(),
            self.store_file(),
            self.store_password(),
        ) {
            (Some(key_alias), Some(key_password), Some(store_file), Some(store_password)) => {
                Ok(CompleteSigning {
                    key_alias,
                    key_password,
                    store_file,
                    store_password,
                })
            }
            _ => Err(SigningError::MissingField {
                fields: self.missing_fields(),
            }
            .into()),
        }
    }

    /// Redacted, serializable view for display.
    pub fn summary(&self) -> SigningSummary {
        SigningSummary {
            key_alias: self.key_alias.clone(),
            key_password: self.key_password.as_ref().map(|_| constants::REDACTED),
            store_file: self.store_file.clone(),
            store_password: self.store_password.as_ref().map(|_| constants::REDACTED),
            missing: self.missing_fields(),
        }
    }
}

impl fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |set: bool| if set { Some(constants::REDACTED) } else { None };
        f.debug_struct("SigningConfig")
            .field("key_alias", &self.key_alias)
            .field("key_password", &redact(self.key_password.is_some()))
            .field("store_file", &self.store_file)
            .field("store_password", &redact(self.store_password.is_some()))
            .finish()
    }
}

/// A fully set signing config, borrowed from [`SigningConfig::complete`].
#[derive(Clone, Copy)]
pub struct CompleteSigning<'a> {
    pub key_alias: &'a str,
    pub key_password: &'a str,
    pub store_file: &'a Path,
    pub store_password: &'a str,
}

/// Display form of a [`SigningConfig`] with passwords masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningSummary {
    pub key_alias: Option<String>,
    pub key_password: Option<&'static str>,
    pub store_file: Option<PathBuf>,
    pub store_password: Option<&'static str>,
    pub missing: Vec<&'static str>,
}

/// Resolve the release signing config from `root/key.properties`.
///
/// # Errors
///
/// See [`resolve_from`].
pub fn resolve(root: &Path, mode: ResolveMode) -> Result<SigningConfig> {
    resolve_from(root, &root.join(constants::PROPERTIES_FILE), mode)
}

/// Resolve the release signing config from an explicit properties file.
///
/// A missing file yields an empty config in both modes. `storeFile` is
/// resolved against `root` unless it is absolute.
///
/// # Errors
///
/// Returns `SigningError::ReadFile` if the file exists but cannot be read.
/// In strict mode, returns `SigningError::MissingField` for absent keys
/// (listing an empty `storeFile` with them), or `SigningError::InvalidPath`
/// when an empty `storeFile` is the only problem.
pub fn resolve_from(root: &Path, properties: &Path, mode: ResolveMode) -> Result<SigningConfig> {
    debug!(path = %properties.display(), %mode, "resolving signing config");

    let exists = properties
        .try_exists()
        .map_err(|source| SigningError::ReadFile {
            path: properties.to_path_buf(),
            source,
        })?;
    if !exists {
        debug!("no signing properties, release build will be unsigned");
        return Ok(SigningConfig::default());
    }

    let props = Properties::load_or_empty(properties)?;
    from_properties(root, &props, mode)
}

/// Build a signing config from parsed properties.
///
/// # Errors
///
/// Same as [`resolve_from`] in strict mode.
pub fn from_properties(root: &Path, props: &Properties, mode: ResolveMode) -> Result<SigningConfig> {
    let store_file = props.get(STORE_FILE);
    let empty_store_file = store_file.is_some_and(|value| value.trim().is_empty());

    let absent: Vec<&'static str> = constants::SIGNING_KEYS
        .iter()
        .copied()
        .filter(|key| !props.contains_key(key))
        .collect();

    if mode == ResolveMode::Strict {
        match (absent.is_empty(), empty_store_file) {
            (true, false) => {}
            (true, true) => return Err(SigningError::InvalidPath { field: STORE_FILE }.into()),
            (false, _) => {
                // An empty storeFile is reported alongside the absent keys.
                let fields = constants::SIGNING_KEYS
                    .iter()
                    .copied()
                    .filter(|key| absent.contains(key) || (empty_store_file && *key == STORE_FILE))
                    .collect();
                return Err(SigningError::MissingField { fields }.into());
            }
        }
    } else {
        if empty_store_file {
            warn!(field = STORE_FILE, "empty keystore path left unresolved");
        }
        for field in &absent {
            warn!(field = *field, "signing property missing, defaulted to none");
        }
    }

    let config = SigningConfig::new(
        props.get(KEY_ALIAS).map(str::to_string),
        props.get(KEY_PASSWORD).map(str::to_string),
        store_file
            .filter(|_| !empty_store_file)
            .map(|value| resolve_store_file(root, value)),
        props.get(STORE_PASSWORD).map(str::to_string),
    );

    debug!(complete = config.is_complete(), "signing config resolved");
    Ok(config)
}

fn resolve_store_file(root: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FULL: &str = "keyAlias=rel\nkeyPassword=pw1\nstoreFile=release.jks\nstorePassword=pw2\n";

    fn project(contents: Option<&str>) -> TempDir {
        let tmp = TempDir::new().unwrap();
        if let Some(contents) = contents {
            fs::write(tmp.path().join("key.properties"), contents).unwrap();
        }
        tmp
    }

    #[test]
    fn test_resolve_full_properties() {
        let tmp = project(Some(FULL));

        for mode in [ResolveMode::Strict, ResolveMode::Lenient] {
            let config = resolve(tmp.path(), mode).unwrap();
            assert_eq!(config.key_alias(), Some("rel"));
            assert_eq!(config.key_password(), Some("pw1"));
            assert_eq!(config.store_file(), Some(tmp.path().join("release.jks").as_path()));
            assert_eq!(config.store_password(), Some("pw2"));
            assert!(config.is_complete());
        }
    }

    #[test]
    fn test_resolve_absent_file_is_empty() {
        let tmp = project(None);

        for mode in [ResolveMode::Strict, ResolveMode::Lenient] {
            let config = resolve(tmp.path(), mode).unwrap();
            assert!(config.is_empty());
            assert_eq!(config, SigningConfig::default());
        }
    }

    #[test]
    fn test_resolve_partial_lenient() {
        let tmp = project(Some("keyAlias=rel\n"));

        let config = resolve(tmp.path(), ResolveMode::Lenient).unwrap();
        assert_eq!(config.key_alias(), Some("rel"));
        assert_eq!(config.key_password(), None);
        assert_eq!(config.store_file(), None);
        assert_eq!(config.store_password(), None);
        assert_eq!(
            config.missing_fields(),
            vec!["keyPassword", "storeFile", "storePassword"]
        );
    }

    #[test]
    fn test_resolve_partial_strict() {
        let tmp = project(Some("keyAlias=rel\n"));

        let err = resolve(tmp.path(), ResolveMode::Strict).unwrap_err();
        match err {
            crate::error::Error::Signing(SigningError::MissingField { fields }) => {
                assert_eq!(fields, vec!["keyPassword", "storeFile", "storePassword"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_empty_store_file() {
        let tmp = project(Some(
            "keyAlias=rel\nkeyPassword=pw1\nstoreFile=\nstorePassword=pw2\n",
        ));

        let lenient = resolve(tmp.path(), ResolveMode::Lenient).unwrap();
        assert_eq!(lenient.store_file(), None);
        assert_eq!(lenient.missing_fields(), vec!["storeFile"]);

        let err = resolve(tmp.path(), ResolveMode::Strict).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Signing(SigningError::InvalidPath { field: "storeFile" })
        ));
    }

    #[test]
    fn test_resolve_empty_store_file_with_absent_keys_strict() {
        let tmp = project(Some("keyAlias=rel\nstoreFile=\n"));

        let err = resolve(tmp.path(), ResolveMode::Strict).unwrap_err();
        match err {
            crate::error::Error::Signing(SigningError::MissingField { fields }) => {
                assert_eq!(fields, vec!["keyPassword", "storeFile", "storePassword"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_complete_borrows_all_fields() {
        let config = SigningConfig::new(
            Some("rel".into()),
            Some("a".into()),
            Some(PathBuf::from("k.jks")),
            Some("b".into()),
        );

        let parts = config.complete().unwrap();
        assert_eq!(parts.key_alias, "rel");
        assert_eq!(parts.store_file, Path::new("k.jks"));

        let partial = SigningConfig::new(Some("rel".into()), None, None, Some("b".into()));
        assert!(partial.complete().is_err());
    }

    #[test]
    fn test_resolve_bare_cr_file() {
        let tmp = project(Some(
            "keyAlias=rel\rkeyPassword=pw1\rstoreFile=release.jks\rstorePassword=pw2\r",
        ));

        let config = resolve(tmp.path(), ResolveMode::Lenient).unwrap();
        assert_eq!(config.key_alias(), Some("rel"));
        assert!(config.is_complete());
    }

    #[test]
    fn test_resolve_keeps_empty_passwords() {
        let tmp = project(Some(
            "keyAlias=rel\nkeyPassword=\nstoreFile=release.jks\nstorePassword=\n",
        ));

        let config = resolve(tmp.path(), ResolveMode::Strict).unwrap();
        assert_eq!(config.key_password(), Some(""));
        assert_eq!(config.store_password(), Some(""));
    }

    #[test]
    fn test_resolve_absolute_store_file() {
        let tmp = project(None);
        let keystore = tmp.path().join("keys").join("upload.jks");
        fs::write(
            tmp.path().join("key.properties"),
            format!(
                "keyAlias=rel\nkeyPassword=a\nstoreFile={}\nstorePassword=b\n",
                keystore.display()
            ),
        )
        .unwrap();

        let config = resolve(tmp.path(), ResolveMode::Strict).unwrap();
        assert_eq!(config.store_file(), Some(keystore.as_path()));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let tmp = project(Some(FULL));

        let first = resolve(tmp.path(), ResolveMode::Lenient).unwrap();
        let second = resolve(tmp.path(), ResolveMode::Lenient).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_from_explicit_path() {
        let tmp = project(None);
        let props = tmp.path().join("android").join("key.properties");
        fs::create_dir_all(props.parent().unwrap()).unwrap();
        fs::write(&props, FULL).unwrap();

        let config = resolve_from(tmp.path(), &props, ResolveMode::Strict).unwrap();
        assert_eq!(config.store_file(), Some(tmp.path().join("release.jks").as_path()));
    }

    #[test]
    fn test_ensure_complete() {
        assert!(SigningConfig::new(
            Some("rel".into()),
            Some("a".into()),
            Some(PathBuf::from("k.jks")),
            Some("b".into()),
        )
        .ensure_complete()
        .is_ok());

        let err = SigningConfig::default().ensure_complete().unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing signing fields: keyAlias, keyPassword, storeFile, storePassword"
        );
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let config = SigningConfig::new(
            Some("rel".into()),
            Some("hunter2".into()),
            Some(PathBuf::from("k.jks")),
            Some("swordfish".into()),
        );

        let debug = format!("{:?}", config);
        assert!(debug.contains("rel"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("swordfish"));
    }

    #[test]
    fn test_summary_serializes_redacted() {
        let config = SigningConfig::new(Some("rel".into()), Some("hunter2".into()), None, None);

        let json = serde_json::to_value(config.summary()).unwrap();
        assert_eq!(json["keyAlias"], "rel");
        assert_eq!(json["keyPassword"], "********");
        assert!(json["storePassword"].is_null());
        assert_eq!(json["missing"][0], "storeFile");
    }

    #[test]
    fn test_mode_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ResolveMode,
        }

        let w: Wrapper = toml::from_str("mode = \"lenient\"").unwrap();
        assert_eq!(w.mode, ResolveMode::Lenient);
        assert_eq!(ResolveMode::default(), ResolveMode::Strict);
    }
}
