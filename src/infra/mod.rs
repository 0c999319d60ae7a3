//! Infrastructure layer
//!
//! Handles external processes.
//! This module is the only place where processes are spawned.

pub mod process;
