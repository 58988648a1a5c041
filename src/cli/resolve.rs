//! Resolve command - print the release signing config.

use std::path::Path;

use crate::cli::{output, ModeArgs};
use crate::core::config::ProjectConfig;
use crate::core::constants;
use crate::core::signing::{self, SigningSummary};
use crate::error::Result;

/// Resolve and print the signing config for the project at `root`.
pub fn execute(root: &Path, mode: ModeArgs, json: bool) -> Result<()> {
    let config = ProjectConfig::load(root)?;
    let mode = mode.resolve(&config);
    let signing = signing::resolve(root, mode)?;
    let summary = signing.summary();

    if json {
        output::data(&serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_signing(&summary);

    if signing.is_empty() {
        output::dimmed(&format!(
            "no {} found, release build will be unsigned",
            constants::PROPERTIES_FILE
        ));
    } else if !summary.missing.is_empty() {
        output::warn(&format!("missing: {}", summary.missing.join(", ")));
    }

    Ok(())
}

/// Print a signing summary as key-value lines.
pub(crate) fn print_signing(summary: &SigningSummary) {
    output::kv(constants::KEY_ALIAS, output::or_unset(summary.key_alias.as_deref()));
    output::kv(constants::KEY_PASSWORD, output::or_unset(summary.key_password));
    output::kv(
        constants::STORE_FILE,
        output::or_unset(summary.store_file.as_ref().map(|p| output::path(p.display()))),
    );
    output::kv(constants::STORE_PASSWORD, output::or_unset(summary.store_password));
}
