//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use assert_fs::prelude::*;
use assert_fs::TempDir;
use std::path::PathBuf;
use std::process::{Command, Output};

/// File the fake compiler writes its arguments to, one per line
pub const ARGS_FILE: &str = "gcc-args.txt";

/// Fake `gcc` that records its arguments and exits with `$FAKE_GCC_EXIT`
const FAKE_GCC: &str = r#"#!/bin/sh
for arg in "$@"; do
    printf '%s\n' "$arg" >> "$FAKE_GCC_ARGS"
done
echo "fake gcc: compiling"
echo "fake gcc: diagnostics" >&2
exit "${FAKE_GCC_EXIT:-0}"
"#;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Directory holding the fake toolchain, kept outside the project
    pub bin: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            bin: TempDir::new().expect("Failed to create temp bin directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write cbuild.txt
    pub fn write_manifest(&self, content: &str) {
        self.dir
            .child("cbuild.txt")
            .write_str(content)
            .expect("Failed to write manifest");
    }

    /// Absolute path cbuild resolves `name` to
    pub fn source(&self, name: &str) -> String {
        format!("{}/{name}", self.dir.path().display())
    }

    /// Install the fake gcc in the bin directory
    #[cfg(unix)]
    pub fn install_fake_gcc(&self) {
        use std::os::unix::fs::PermissionsExt;

        let gcc = self.bin.child("gcc");
        gcc.write_str(FAKE_GCC).expect("Failed to write fake gcc");
        std::fs::set_permissions(gcc.path(), std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake gcc executable");
    }

    /// Arguments recorded by the fake gcc, if it ran
    pub fn recorded_args(&self) -> Option<Vec<String>> {
        let path = self.bin.path().join(ARGS_FILE);
        if !path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(path).expect("Failed to read recorded args");
        Some(content.lines().map(str::to_string).collect())
    }

    /// Run cbuild in the project with only the bin directory on PATH
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_exit(args, 0)
    }

    /// Run cbuild with the fake gcc exiting with `exit_code`
    pub fn run_with_exit(&self, args: &[&str], exit_code: i32) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_cbuild"));
        cmd.current_dir(self.path())
            .env("PATH", self.bin.path())
            .env("FAKE_GCC_ARGS", self.bin.path().join(ARGS_FILE))
            .env("FAKE_GCC_EXIT", exit_code.to_string())
            .env_remove("RUST_LOG");
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute cbuild")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Lossy stderr of a finished run
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Lossy stdout of a finished run
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
