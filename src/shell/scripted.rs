//! Scripted process runner for testing.
//!
//! `ScriptedRunner` implements [`ProcessRunner`] without spawning anything.
//! Each program name is mapped to a canned outcome, and every invocation is
//! recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use apkctl::shell::{ProcessRunner, ScriptedRunner};
//! use std::ffi::OsStr;
//!
//! let runner = ScriptedRunner::new();
//! runner.succeed("java", "", "openjdk version \"17.0.2\"");
//! runner.missing("gradle");
//!
//! assert!(runner.run(OsStr::new("java"), &["-version"]).unwrap().success);
//! assert!(runner.run(OsStr::new("gradle"), &["--version"]).is_err());
//! assert_eq!(runner.calls().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;

use crate::error::{ApkctlError, Result};

use super::{CommandResult, ProcessRunner};

#[derive(Debug, Clone)]
enum Outcome {
    Exit(CommandResult),
    Missing,
}

/// Process runner that replays configured outcomes.
///
/// Programs are matched by file name, so `/tmp/x/gradlew` and `gradlew`
/// resolve to the same script. Unconfigured programs behave as missing.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    outcomes: RefCell<HashMap<String, Outcome>>,
    calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl ScriptedRunner {
    /// Create a runner with no configured programs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` exit with status 0.
    pub fn succeed(&self, program: &str, stdout: &str, stderr: &str) {
        self.set(
            program,
            Outcome::Exit(CommandResult::success(
                stdout.to_string(),
                stderr.to_string(),
                Duration::ZERO,
            )),
        );
    }

    /// Make `program` exit with `code`.
    pub fn fail(&self, program: &str, code: i32, stdout: &str, stderr: &str) {
        self.set(
            program,
            Outcome::Exit(CommandResult::failure(
                Some(code),
                stdout.to_string(),
                stderr.to_string(),
                Duration::ZERO,
            )),
        );
    }

    /// Make `program` be killed by a signal (no exit code).
    pub fn killed(&self, program: &str) {
        self.set(
            program,
            Outcome::Exit(CommandResult::failure(
                None,
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
        );
    }

    /// Make `program` fail to launch.
    pub fn missing(&self, program: &str) {
        self.set(program, Outcome::Missing);
    }

    /// Every invocation so far, as (program file name, args).
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }

    /// Whether `program` was invoked at least once.
    pub fn was_called(&self, program: &str) -> bool {
        self.calls.borrow().iter().any(|(p, _)| p == program)
    }

    fn set(&self, program: &str, outcome: Outcome) {
        self.outcomes
            .borrow_mut()
            .insert(program.to_string(), outcome);
    }
}

fn program_key(program: &OsStr) -> String {
    Path::new(program)
        .file_name()
        .unwrap_or(program)
        .to_string_lossy()
        .into_owned()
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, program: &OsStr, args: &[&str]) -> Result<CommandResult> {
        let key = program_key(program);
        self.calls.borrow_mut().push((
            key.clone(),
            args.iter().map(|a| a.to_string()).collect(),
        ));

        match self.outcomes.borrow().get(&key) {
            Some(Outcome::Exit(result)) => Ok(result.clone()),
            Some(Outcome::Missing) | None => Err(ApkctlError::CommandLaunch {
                program: key,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
            }),
        }
    }
}
