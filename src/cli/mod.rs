//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod output;

use std::ffi::OsString;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::defaults::DEFAULT_EXECUTABLE_NAME;
use crate::core::build::{run_build, BuildOptions};
use crate::core::compiler::Compiler;
use crate::error::CbuildError;
use crate::infra::process::SystemRunner;
use output::status;

/// Long flags that may be written with a single dash
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["out"];

/// cbuild - build a C program from cbuild.txt
///
/// Compiles every source file listed in ./cbuild.txt with gcc.
#[derive(Parser, Debug)]
#[command(name = "cbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the output executable file
    #[arg(
        long = "out",
        value_name = "NAME",
        default_value = DEFAULT_EXECUTABLE_NAME,
        allow_hyphen_values = true
    )]
    pub out: String,

    /// Arguments after the first positional one are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub ignored: Vec<OsString>,
}

impl Cli {
    /// Parse arguments, accepting `-out` as well as `--out`
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    /// Build options selected on the command line
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            output_name: self.out.clone(),
        }
    }

    /// Build the project in the current working directory
    pub fn run(self) -> Result<()> {
        let project_dir =
            std::env::current_dir().context("failed to determine working directory")?;
        if !self.ignored.is_empty() {
            tracing::warn!("ignoring extra arguments: {:?}", self.ignored);
        }
        let options = self.build_options();
        let compiler = Compiler::new(SystemRunner::new());

        let report = run_build(&project_dir, &options, &compiler).map_err(|e| {
            let stage = match &e {
                CbuildError::Manifest(_) => "error while gathering files",
                CbuildError::Compile(_) => "error while compiling",
            };
            anyhow::Error::new(e).context(stage)
        })?;

        println!(
            "{} Built {} from {} source file(s)",
            status::SUCCESS,
            options.output_name,
            report.sources.len()
        );
        Ok(())
    }
}

/// Rewrite single-dash long flags (`-out`, `-out=x`) to their `--` form
///
/// Values following a flag are left untouched, as is everything from the
/// first positional argument or `--` onwards.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expecting_value = false;
    let mut passthrough = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();

        // argv[0]
        if index == 0 || passthrough || expecting_value {
            expecting_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        if text == "--" || text == "-" || !text.starts_with('-') {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        let rewritten = text.strip_prefix('-').and_then(|rest| {
            if rest.starts_with('-') {
                return None;
            }
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            SINGLE_DASH_LONG_FLAGS
                .contains(&name)
                .then(|| (format!("-{text}"), !rest.contains('=')))
        });

        match rewritten {
            Some((flag, takes_next)) => {
                expecting_value = takes_next;
                normalized.push(OsString::from(flag));
            }
            None => {
                let bare = text.trim_start_matches('-');
                expecting_value = text.starts_with("--")
                    && !bare.contains('=')
                    && SINGLE_DASH_LONG_FLAGS.contains(&bare);
                normalized.push(arg);
            }
        }
    }

    normalized
}
