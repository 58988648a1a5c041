//! Check command - verify the release build can be signed.
//!
//! Always evaluates in strict mode, regardless of `keyprops.toml`.

use std::path::Path;

use crate::cli::output;
use crate::core::config::ProjectConfig;
use crate::core::plan::BuildPlan;
use crate::core::signing::ResolveMode;
use crate::error::Result;

/// Run the strict release check.
pub fn execute(root: &Path, json: bool) -> Result<()> {
    let config = ProjectConfig::load(root)?;
    let plan = BuildPlan::evaluate(root, &config, ResolveMode::Strict)?;
    let report = plan.check()?;

    if json {
        output::data(&serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::success(&format!(
        "{} signing ok ({})",
        plan.release.name, plan.app.application_id
    ));
    output::kv("keystore", output::path(report.keystore.display()));
    output::kv("sha256", &report.keystore_sha256);
    output::kv("size", format!("{} bytes", report.keystore_bytes));

    Ok(())
}
