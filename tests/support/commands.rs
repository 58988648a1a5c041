//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a keyprops command rooted at the test project.
    ///
    /// Colors and inherited logging filters are disabled so output is
    /// stable across environments.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("keyprops").expect("failed to find keyprops binary");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("KEYPROPS_LOG");
        cmd.env_remove("KEYPROPS_ROOT");
        cmd.arg("--root").arg(self.dir.path());
        cmd
    }

    /// Run keyprops with the given arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run keyprops")
    }

    /// Shortcut for `keyprops resolve`.
    pub fn resolve(&self, extra: &[&str]) -> Output {
        let mut args = vec!["resolve"];
        args.extend_from_slice(extra);
        self.run(&args)
    }

    /// Shortcut for `keyprops plan`.
    pub fn plan(&self, extra: &[&str]) -> Output {
        let mut args = vec!["plan"];
        args.extend_from_slice(extra);
        self.run(&args)
    }

    /// Shortcut for `keyprops check`.
    pub fn check(&self) -> Output {
        self.run(&["check"])
    }
}
