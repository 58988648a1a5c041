//! Plan command - print the release build plan.

use std::path::Path;

use crate::cli::{output, resolve::print_signing, ModeArgs};
use crate::core::config::ProjectConfig;
use crate::core::plan::BuildPlan;
use crate::error::Result;

/// Evaluate and print the release build plan.
pub fn execute(root: &Path, mode: ModeArgs, json: bool) -> Result<()> {
    let config = ProjectConfig::load(root)?;
    let mode = mode.resolve(&config);
    let plan = BuildPlan::evaluate(root, &config, mode)?;
    let summary = plan.summary();

    if json {
        output::data(&serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    output::section("App");
    output::kv("namespace", &plan.app.namespace);
    output::kv("applicationId", &plan.app.application_id);
    output::kv("jvmTarget", &plan.app.java_target);

    output::section("Host SDK");
    output::kv("compileSdk", plan.host.compile_sdk);
    output::kv("minSdk", plan.host.min_sdk);
    output::kv("targetSdk", plan.host.target_sdk);
    output::kv("versionCode", plan.host.version_code);
    output::kv("versionName", &plan.host.version_name);

    output::section(&format!("Build type: {}", plan.release.name));
    output::kv("mode", plan.mode());
    output::kv("minify", plan.release.minify_enabled);
    output::kv("shrinkResources", plan.release.shrink_resources);
    print_signing(&summary.signing);

    Ok(())
}
