//! Test support utilities for keyprops integration tests.
//!
//! Provides an isolated project directory and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Test environment with an isolated project root.
///
/// Commands run with `--root` pointing at the temp dir, so tests never
/// change the process working directory and can run in parallel.
pub struct Test {
    /// Temporary project root
    pub dir: TempDir,
}

impl Test {
    /// Create an empty project.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a project with `key.properties` written.
    pub fn with_properties(contents: &str) -> Self {
        let t = Self::new();
        t.write("key.properties", contents);
        t
    }

    /// Create a fully signed project: complete properties plus keystore.
    pub fn signed() -> Self {
        let t = Self::with_properties(FULL_PROPERTIES);
        t.write("release.jks", KEYSTORE_BYTES);
        t
    }

    /// Project root path.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root.
    pub fn write(&self, name: &str, contents: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(path, contents).expect("failed to write file");
    }
}
