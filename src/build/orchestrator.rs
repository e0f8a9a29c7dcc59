//! Debug APK build through the Gradle wrapper.

use std::ffi::OsStr;
use std::path::Path;

use crate::error::{ApkctlError, Result};
use crate::shell::{CommandResult, HostFamily, ProcessRunner};
use crate::ui::UserInterface;

use super::wrapper::{GradleWrapper, ARTIFACT_PATH, BUILD_TASK};

/// Runs `<wrapper> assembleDebug` once and reports the outcome.
///
/// There is no retry and no timeout; the call blocks until Gradle exits.
pub struct BuildOrchestrator<'a> {
    runner: &'a dyn ProcessRunner,
    wrapper: GradleWrapper,
}

impl<'a> BuildOrchestrator<'a> {
    /// Create an orchestrator for the project at `project_root`.
    pub fn new(runner: &'a dyn ProcessRunner, project_root: &Path, family: HostFamily) -> Self {
        Self {
            runner,
            wrapper: GradleWrapper::locate(project_root, family),
        }
    }

    /// The wrapper this orchestrator will invoke.
    pub fn wrapper(&self) -> &GradleWrapper {
        &self.wrapper
    }

    /// Build the debug APK and report every step to the UI.
    ///
    /// Returns `true` only when the wrapper exited with status zero.
    pub fn build_with_wrapper(&self, ui: &mut dyn UserInterface) -> bool {
        ui.message("Building APK with Gradle wrapper...");

        if !self.wrapper.exists() {
            let err = ApkctlError::WrapperNotFound {
                path: self.wrapper.display_name().into(),
            };
            ui.error(&err.to_string());
            return false;
        }

        if let Err(e) = self.wrapper.ensure_executable() {
            tracing::warn!("chmod {} failed: {}", self.wrapper.path().display(), e);
            ui.warning(&format!(
                "Could not make {} executable: {}",
                self.wrapper.display_name(),
                e
            ));
        }

        let command_line = format!("{} {}", self.wrapper.display_name(), BUILD_TASK);
        let mut spinner = ui.start_spinner(&format!("Running {}", command_line));

        match self.invoke() {
            Ok(result) if result.success => {
                spinner.finish_success("APK built successfully");
                if ui.output_mode().shows_command_output() && !result.stdout.is_empty() {
                    ui.message(result.stdout.trim_end());
                }
                ui.message(&format!("APK location: {}", ARTIFACT_PATH));
                true
            }
            Ok(result) => {
                tracing::warn!(
                    "{}",
                    ApkctlError::CommandFailed {
                        command: command_line.clone(),
                        code: result.exit_code,
                    }
                );
                spinner.finish_error(&failure_line(&result));
                ui.show_error_block(&command_line, &captured_streams(&result), None);
                false
            }
            Err(ApkctlError::CommandLaunch { .. }) => {
                spinner.finish_error(&format!(
                    "Could not find Gradle wrapper: {}",
                    self.wrapper.display_name()
                ));
                false
            }
            Err(e) => {
                spinner.finish_error(&format!("Build failed: {}", e));
                false
            }
        }
    }

    /// Invoke the wrapper without any reporting.
    pub fn invoke(&self) -> Result<CommandResult> {
        self.runner
            .run(OsStr::new(self.wrapper.path()), &[BUILD_TASK])
    }
}

fn failure_line(result: &CommandResult) -> String {
    match result.exit_code {
        Some(code) => format!("Build failed with exit code {}", code),
        None => "Build failed: process terminated by a signal".to_string(),
    }
}

/// Both captured streams, unmodified, under `STDOUT:` / `STDERR:` labels.
fn captured_streams(result: &CommandResult) -> String {
    format!("STDOUT: {}\nSTDERR: {}", result.stdout, result.stderr)
}
