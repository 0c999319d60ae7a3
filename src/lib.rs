//! cbuild - build a C program from a flat manifest
//!
//! Reads `cbuild.txt` from the working directory, resolves every listed
//! source file to an absolute path and compiles them all with `gcc` into
//! a single executable.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Manifest reading, compiler invocation and build flow
//! - [`infra`] - Infrastructure layer (external processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
