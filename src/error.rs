//! Error types for cbuild
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest reading errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest could not be opened or read
    #[error("Failed to read manifest '{path}'")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The same resolved source path appears twice
    #[error("duplicate source file: {path}")]
    DuplicateSource { path: PathBuf },
}

/// Compiler invocation errors
#[derive(Error, Debug)]
pub enum CompileError {
    /// Compiler process could not be started
    #[error("Failed to run '{program}': {error}")]
    Spawn { program: String, error: String },

    /// Compiler exited with a non-zero status
    #[error("'{program}' exited with {}", describe_status(*status))]
    Failed {
        program: String,
        status: Option<i32>,
        output: String,
    },
}

fn describe_status(status: Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

/// Top-level cbuild error type
#[derive(Error, Debug)]
pub enum CbuildError {
    /// Manifest error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Compile error
    #[error(transparent)]
    Compile(#[from] CompileError),
}
