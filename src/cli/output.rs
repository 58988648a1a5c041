//! Terminal output for keyprops commands.
//!
//! Results go to stdout, errors and hints to stderr. Styling is dropped
//! when `NO_COLOR` is set so scripted callers get plain text.

use console::{style, StyledObject};
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Render `value` with `paint` applied, or plain when colors are off.
fn styled<D: Display>(value: D, paint: impl FnOnce(StyledObject<D>) -> StyledObject<D>) -> String {
    if colors_enabled() {
        paint(style(value)).to_string()
    } else {
        value.to_string()
    }
}

/// `✓ release signing ok`
pub fn success(msg: &str) {
    println!("{} {}", styled("✓", |s| s.green()), msg);
}

/// `✗ keystore not found: release.jks` on stderr
pub fn error(msg: &str) {
    eprintln!("{} {}", styled("✗", |s| s.red()), msg);
}

/// `⚠ missing: storePassword`
pub fn warn(msg: &str) {
    println!("{} {}", styled("⚠", |s| s.yellow()), msg);
}

/// `→ add the missing keys to key.properties` on stderr
pub fn hint(msg: &str) {
    eprintln!("{} {}", styled("→", |s| s.cyan()), styled(msg, |s| s.cyan()));
}

/// Two-space indented `label  value` line.
pub fn kv(label: &str, value: impl Display) {
    println!(
        "  {}  {}",
        styled(label, |s| s.dim()),
        styled(value, |s| s.bold())
    );
}

/// Blank line, bold title, then a rule.
pub fn section(title: &str) {
    println!();
    println!("{}", styled(title, |s| s.bold()));
    println!("{}", styled("─".repeat(RULE_WIDTH), |s| s.dim()));
}

/// Format a path for inline use.
pub fn path(p: impl Display) -> String {
    styled(p, |s| s.cyan())
}

pub fn dimmed(msg: &str) {
    println!("{}", styled(msg, |s| s.dim()));
}

/// Unstyled stdout, for JSON.
pub fn data(msg: &str) {
    println!("{}", msg);
}

/// Display an optional value, or `(unset)`.
pub fn or_unset(value: Option<impl Display>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "(unset)".to_string(),
    }
}
