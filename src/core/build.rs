//! Build orchestration
//!
//! Reads the manifest from a project directory and hands the resolved
//! sources to the compiler. Any failure ends the build; nothing is retried.

use std::path::{Path, PathBuf};

use crate::config::defaults::{DEFAULT_EXECUTABLE_NAME, MANIFEST_FILE};
use crate::core::compiler::Compiler;
use crate::core::manifest::{read_manifest, SourceList};
use crate::error::CbuildError;
use crate::infra::process::CommandRunner;

/// Build options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Name of the output executable
    pub output_name: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            output_name: DEFAULT_EXECUTABLE_NAME.to_string(),
        }
    }
}

/// Outcome of a successful build
#[derive(Debug)]
pub struct BuildReport {
    /// Sources passed to the compiler, in order
    pub sources: SourceList,
    /// Captured compiler output
    pub compiler_output: String,
}

/// Path of the manifest inside `project_dir`
pub fn manifest_path(project_dir: &Path) -> PathBuf {
    project_dir.join(MANIFEST_FILE)
}

/// Build the project in `project_dir`
///
/// Source entries are resolved against `project_dir`. The compiler is only
/// invoked once the whole manifest has been read without error.
pub fn run_build<R: CommandRunner>(
    project_dir: &Path,
    options: &BuildOptions,
    compiler: &Compiler<R>,
) -> Result<BuildReport, CbuildError> {
    let manifest = manifest_path(project_dir);
    tracing::info!("gathering files for {}", manifest.display());

    let sources = read_manifest(&manifest, project_dir)?;
    tracing::info!(
        "building project in {} with files: {:?}",
        project_dir.display(),
        sources.files()
    );

    if sources.is_empty() {
        tracing::warn!(
            "{} lists no source files, invoking {} anyway",
            manifest.display(),
            compiler.program()
        );
    }

    let compiler_output = compiler.compile(sources.files(), &options.output_name)?;

    Ok(BuildReport {
        sources,
        compiler_output,
    })
}
