//! Constants used throughout keyprops.
//!
//! Centralizes file names and property keys.

/// Signing properties file, relative to the project root.
pub const PROPERTIES_FILE: &str = "key.properties";

/// Optional project configuration file, relative to the project root.
pub const CONFIG_FILE: &str = "keyprops.toml";

/// The only build variant that carries a signing config.
pub const RELEASE_VARIANT: &str = "release";

/// Property holding the key alias inside the keystore.
pub const KEY_ALIAS: &str = "keyAlias";

/// Property holding the key password.
pub const KEY_PASSWORD: &str = "keyPassword";

/// Property holding the keystore path.
pub const STORE_FILE: &str = "storeFile";

/// Property holding the keystore password.
pub const STORE_PASSWORD: &str = "storePassword";

/// Signing properties in canonical order.
///
/// Error messages list missing fields in this order.
pub const SIGNING_KEYS: &[&str] = &[KEY_ALIAS, KEY_PASSWORD, STORE_FILE, STORE_PASSWORD];

/// Placeholder printed instead of password values.
pub const REDACTED: &str = "********";
