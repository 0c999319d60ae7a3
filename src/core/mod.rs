//! Core business logic module
//!
//! Process spawning belongs in [`crate::infra`]; this module only decides
//! what to run.
//!
//! # Submodules
//!
//! - [`manifest`] - Manifest (cbuild.txt) reading and validation
//! - [`compiler`] - Compiler argument assembly and invocation
//! - [`build`] - Build orchestration

pub mod build;
pub mod compiler;
pub mod manifest;
