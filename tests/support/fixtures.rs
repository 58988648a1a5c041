//! Test fixtures and constants.

/// Complete signing properties with distinctive passwords.
pub const FULL_PROPERTIES: &str =
    "keyAlias=rel\nkeyPassword=pw1-secret\nstoreFile=release.jks\nstorePassword=pw2-secret\n";

/// Properties with only the alias set.
pub const ALIAS_ONLY: &str = "keyAlias=rel\n";

/// Keystore stand-in; only its bytes matter to `check`.
pub const KEYSTORE_BYTES: &str = "abc";

/// SHA-256 of [`KEYSTORE_BYTES`].
pub const KEYSTORE_SHA256: &str =
    "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

/// A keyprops.toml exercising every section.
pub const FULL_CONFIG: &str = r#"
[app]
namespace = "com.example.multipost"
application_id = "com.example.multipost"

[host]
compile_sdk = 34
min_sdk = 23
target_sdk = 34
version_code = 7
version_name = "1.2.0"

[release]
minify_enabled = false
shrink_resources = false

[signing]
mode = "lenient"
"#;
