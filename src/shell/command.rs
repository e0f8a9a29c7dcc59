//! Process execution.
//!
//! Every external program apkctl touches (version probes, the Gradle
//! wrapper) goes through the [`ProcessRunner`] trait so the checks and the
//! build can be driven by [`ScriptedRunner`](super::ScriptedRunner) in tests.

use crate::error::{ApkctlError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of running a process to completion.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the process succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Stdout and stderr joined, for probes that print to either stream.
    pub fn combined_output(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Runs external programs and captures their output.
///
/// `Err` means the program could not be started at all; a program that
/// started and exited non-zero is an `Ok` result with `success == false`.
pub trait ProcessRunner {
    /// Run `program` with `args` and wait for it to finish.
    fn run(&self, program: &OsStr, args: &[&str]) -> Result<CommandResult>;
}

/// Runs programs on the real system.
///
/// Blocks until the child exits; no timeout is applied.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    cwd: Option<PathBuf>,
}

impl SystemRunner {
    /// Create a runner that inherits the current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that starts every process in `cwd`.
    pub fn in_dir(cwd: &Path) -> Self {
        Self {
            cwd: Some(cwd.to_path_buf()),
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &OsStr, args: &[&str]) -> Result<CommandResult> {
        let start = Instant::now();
        let name = program.to_string_lossy().into_owned();
        tracing::debug!("Running {} {}", name, args.join(" "));

        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd.output().map_err(|source| ApkctlError::CommandLaunch {
            program: name.clone(),
            source,
        })?;

        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        tracing::debug!(
            "{} exited with {:?} after {:?}",
            name,
            output.status.code(),
            duration
        );

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr, duration))
        } else {
            Ok(CommandResult::failure(
                output.status.code(),
                stdout,
                stderr,
                duration,
            ))
        }
    }
}
