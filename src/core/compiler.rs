//! Compiler invocation
//!
//! Builds the compiler argument list and runs it through a
//! [`CommandRunner`]. Argument order is fixed: every source path in the
//! order given, then [`OUTPUT_FLAG`], then the output name.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::defaults::{COMPILER, OUTPUT_FLAG};
use crate::error::CompileError;
use crate::infra::process::CommandRunner;

/// Assemble the compiler argument list
pub fn compiler_args(sources: &[PathBuf], output_name: &str) -> Vec<OsString> {
    let mut args: Vec<OsString> = sources.iter().map(|p| p.as_os_str().to_owned()).collect();
    args.push(OsString::from(OUTPUT_FLAG));
    args.push(OsString::from(output_name));
    args
}

/// Drives a compiler binary through a [`CommandRunner`]
#[derive(Debug)]
pub struct Compiler<R> {
    program: String,
    runner: R,
}

impl<R: CommandRunner> Compiler<R> {
    /// Compiler using the default binary
    pub fn new(runner: R) -> Self {
        Self::with_program(COMPILER, runner)
    }

    /// Compiler using a specific binary name
    pub fn with_program(program: impl Into<String>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    /// Name of the compiler binary
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Compile `sources` into `output_name`
    ///
    /// Returns the captured compiler output on success. Artifacts left
    /// behind by a failed compile are not removed.
    pub fn compile(&self, sources: &[PathBuf], output_name: &str) -> Result<String, CompileError> {
        let args = compiler_args(sources, output_name);
        tracing::info!(
            "{} arguments: {:?}",
            self.program,
            args.iter().map(|a| a.to_string_lossy()).collect::<Vec<_>>()
        );

        let result = self
            .runner
            .run(&self.program, &args)
            .map_err(|e| CompileError::Spawn {
                program: self.program.clone(),
                error: e.to_string(),
            })?;

        let text = result.text();
        if !result.success {
            tracing::error!("{} output: {}", self.program, text);
            return Err(CompileError::Failed {
                program: self.program.clone(),
                status: result.status,
                output: text,
            });
        }

        tracing::info!("{} output: {}", self.program, text);
        Ok(text)
    }
}
