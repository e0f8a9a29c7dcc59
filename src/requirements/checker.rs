//! Prerequisite checker.
//!
//! Evaluates the three build prerequisites: the Java runtime, the Android
//! SDK root and a global Gradle install. Java and the SDK are mandatory;
//! Gradle is optional because the project ships a wrapper script.

use regex::Regex;
use std::ffi::OsStr;
use std::path::Path;
use std::sync::LazyLock;

use crate::shell::{HostEnv, ProcessRunner};
use crate::ui::UserInterface;

use super::status::{CheckResult, CheckStatus, PrerequisiteReport, Severity};

/// Runtime probe.
pub const RUNTIME_COMMAND: (&str, &[&str]) = ("java", &["-version"]);

/// Build tool probe.
pub const BUILD_TOOL_COMMAND: (&str, &[&str]) = ("gradle", &["--version"]);

/// Environment variable naming the Android SDK root.
pub const SDK_ROOT_VAR: &str = "ANDROID_HOME";

/// Version patterns, most specific first.
static VERSION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"version "([^"]+)""#,
        r"Gradle (\d+(?:\.\d+)+)",
        r"(\d+\.\d+(?:\.\d+)?)",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// Checks whether the local machine can build the APK.
///
/// Every check runs on every call; nothing is cached between invocations.
pub struct PrerequisiteChecker<'a> {
    runner: &'a dyn ProcessRunner,
    host: &'a dyn HostEnv,
}

impl<'a> PrerequisiteChecker<'a> {
    /// Create a checker over the given runner and environment.
    pub fn new(runner: &'a dyn ProcessRunner, host: &'a dyn HostEnv) -> Self {
        Self { runner, host }
    }

    /// Run all checks and report each one to the UI.
    ///
    /// Returns `false` if and only if a mandatory check failed.
    pub fn check_prerequisites(&self, ui: &mut dyn UserInterface) -> bool {
        ui.message("Checking prerequisites...");
        let report = self.run_all();

        for result in &report.results {
            match (&result.status, result.severity) {
                (CheckStatus::Passed { detail }, _) => ui.success(detail),
                (CheckStatus::Failed { reason }, Severity::Mandatory) => ui.error(reason),
                (CheckStatus::Failed { reason }, Severity::Optional) => ui.warning(reason),
            }
        }

        if !report.passed() {
            tracing::debug!("Blocking prerequisites: {:?}", report.blockers());
        }
        report.passed()
    }

    /// Run all checks without reporting.
    pub fn run_all(&self) -> PrerequisiteReport {
        PrerequisiteReport {
            results: vec![
                self.check_runtime(),
                self.check_sdk_root(),
                self.check_build_tool(),
            ],
        }
    }

    /// Java must launch and exit with status zero.
    pub fn check_runtime(&self) -> CheckResult {
        let (program, args) = RUNTIME_COMMAND;
        match self.probe(program, args) {
            Some(version) => CheckResult::passed(
                "runtime",
                Severity::Mandatory,
                with_version("Java is installed", version),
            ),
            None => CheckResult::failed(
                "runtime",
                Severity::Mandatory,
                "Java is not installed or not in PATH",
            ),
        }
    }

    /// `ANDROID_HOME` must be set and point at an existing path.
    ///
    /// The filesystem is only consulted once the variable is known to be set.
    pub fn check_sdk_root(&self) -> CheckResult {
        let sdk_root = match self.host.var(SDK_ROOT_VAR) {
            Some(value) if !value.is_empty() => value,
            _ => {
                return CheckResult::failed(
                    "sdk_root",
                    Severity::Mandatory,
                    format!("{} environment variable is not set", SDK_ROOT_VAR),
                )
            }
        };

        if !self.host.path_exists(Path::new(&sdk_root)) {
            return CheckResult::failed(
                "sdk_root",
                Severity::Mandatory,
                format!("{} path does not exist: {}", SDK_ROOT_VAR, sdk_root),
            );
        }

        CheckResult::passed(
            "sdk_root",
            Severity::Mandatory,
            format!("Android SDK found at: {}", sdk_root),
        )
    }

    /// A global Gradle install is nice to have; the wrapper covers its absence.
    pub fn check_build_tool(&self) -> CheckResult {
        let (program, args) = BUILD_TOOL_COMMAND;
        match self.probe(program, args) {
            Some(version) => CheckResult::passed(
                "build_tool",
                Severity::Optional,
                with_version("Gradle is installed", version),
            ),
            None => CheckResult::failed(
                "build_tool",
                Severity::Optional,
                "Gradle is not installed or not in PATH",
            ),
        }
    }

    /// Run a version command. `None` if it failed, `Some(version)` otherwise.
    fn probe(&self, program: &str, args: &[&str]) -> Option<Option<String>> {
        match self.runner.run(OsStr::new(program), args) {
            Ok(result) if result.success => Some(extract_version(&result.combined_output())),
            Ok(result) => {
                tracing::debug!("{} exited with {:?}", program, result.exit_code);
                None
            }
            Err(e) => {
                tracing::debug!("{}", e);
                None
            }
        }
    }
}

fn with_version(line: &str, version: Option<String>) -> String {
    match version {
        Some(v) => format!("{} ({})", line, v),
        None => line.to_string(),
    }
}

/// Extract a version number from version command output.
///
/// Java prints `openjdk version "17.0.2"` on stderr, Gradle prints
/// `Gradle 8.5` followed by the versions of its bundled tools.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_PATTERNS.iter().find_map(|re| {
        re.captures(output)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}
