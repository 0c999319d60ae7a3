//! External process execution
//!
//! [`CommandRunner`] is the boundary between cbuild and the compiler it
//! drives. [`SystemRunner`] spawns real processes; tests substitute their
//! own implementation.

use std::ffi::OsString;
use std::io::{self, Read};
use std::process::{Command, Stdio};

/// Result of running an external command to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was terminated by a signal
    pub status: Option<i32>,
    /// Whether the process exited successfully
    pub success: bool,
    /// Standard output and standard error, as delivered by a shared pipe
    pub output: Vec<u8>,
}

impl CommandOutput {
    /// Captured output as lossy UTF-8 text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

/// Runs an external program and collects its combined output
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits
    ///
    /// An `Err` means the process could not be started or its output could
    /// not be collected. A process that starts and fails is an `Ok` with
    /// `success == false`.
    fn run(&self, program: &str, args: &[OsString]) -> io::Result<CommandOutput>;
}

/// Runs programs found on PATH
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString]) -> io::Result<CommandOutput> {
        let resolved = which::which(program).map_err(|e| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("'{program}' not found in PATH: {e}"),
            )
        })?;
        tracing::debug!("resolved {} to {}", program, resolved.display());

        let (mut reader, writer) = io::pipe()?;

        // The Command holds copies of the write end; it must be dropped
        // before reading or the read never sees EOF.
        let mut child = {
            let mut cmd = Command::new(&resolved);
            cmd.args(args)
                .stdin(Stdio::null())
                .stdout(writer.try_clone()?)
                .stderr(writer);
            cmd.spawn()?
        };

        let mut output = Vec::new();
        let read_result = reader.read_to_end(&mut output);
        let status = child.wait()?;
        read_result?;

        Ok(CommandOutput {
            status: status.code(),
            success: status.success(),
            output,
        })
    }
}
