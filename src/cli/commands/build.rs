//! Build command implementation.
//!
//! `build-apk` checks the prerequisites, runs the Gradle wrapper and
//! points at the finished APK.

use std::path::{Path, PathBuf};

use crate::build::{BuildOrchestrator, ARTIFACT_PATH};
use crate::error::Result;
use crate::requirements::PrerequisiteChecker;
use crate::shell::{HostEnv, HostFamily, ProcessRunner, SystemHost, SystemRunner};
use crate::ui::{hints, UserInterface};

use super::command::{Command, CommandResult};

/// Banner printed before anything else.
pub const BUILD_BANNER: &str = "MyAgenticBrowser Build Script";

/// The build command implementation.
pub struct BuildCommand {
    project_root: PathBuf,
    runner: Box<dyn ProcessRunner>,
    host: Box<dyn HostEnv>,
    family: HostFamily,
}

impl BuildCommand {
    /// Create a build command for the project at `project_root`, running
    /// real processes on the current host.
    ///
    /// A relative root is resolved against the current directory first, so
    /// the wrapper path stays valid once the child runs inside the project.
    pub fn new(project_root: &Path) -> Result<Self> {
        let project_root = std::path::absolute(project_root)?;
        Ok(Self::with_host(
            &project_root,
            Box::new(SystemRunner::in_dir(&project_root)),
            Box::new(SystemHost),
            HostFamily::current(),
        ))
    }

    /// Create a build command over explicit process and environment access.
    pub fn with_host(
        project_root: &Path,
        runner: Box<dyn ProcessRunner>,
        host: Box<dyn HostEnv>,
        family: HostFamily,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            runner,
            host,
            family,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header(BUILD_BANNER);

        let checker = PrerequisiteChecker::new(self.runner.as_ref(), self.host.as_ref());
        if !checker.check_prerequisites(ui) {
            ui.show_hint(hints::after_failed_prerequisites());
            return Ok(CommandResult::failure(1));
        }

        let orchestrator =
            BuildOrchestrator::new(self.runner.as_ref(), &self.project_root, self.family);
        if !orchestrator.build_with_wrapper(ui) {
            return Ok(CommandResult::failure(1));
        }

        ui.success("Build completed successfully!");
        ui.message(&format!("You can find the APK at: {}", ARTIFACT_PATH));
        Ok(CommandResult::success())
    }
}
