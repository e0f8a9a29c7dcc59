//! Gradle wrapper script location and permissions.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::HostFamily;

/// Gradle task producing the debug APK.
pub const BUILD_TASK: &str = "assembleDebug";

/// Where Gradle leaves the debug APK, relative to the project root.
pub const ARTIFACT_PATH: &str = "app/build/outputs/apk/debug/app-debug.apk";

/// Permission bits applied to the wrapper on Unix (rwxr-xr-x).
pub const WRAPPER_MODE: u32 = 0o755;

/// The Gradle wrapper script bundled with the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradleWrapper {
    family: HostFamily,
    path: PathBuf,
}

impl GradleWrapper {
    /// Script name for a host family.
    pub fn file_name(family: HostFamily) -> &'static str {
        match family {
            HostFamily::Windows => "gradlew.bat",
            HostFamily::Unix => "gradlew",
        }
    }

    /// The wrapper expected at the root of `project_root`.
    pub fn locate(project_root: &Path, family: HostFamily) -> Self {
        Self {
            family,
            path: project_root.join(Self::file_name(family)),
        }
    }

    /// Full path to the script.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name as an operator would type it, e.g. `./gradlew`.
    pub fn display_name(&self) -> String {
        format!("./{}", Self::file_name(self.family))
    }

    /// Whether the script is present.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Make the script executable.
    ///
    /// Does nothing for the Windows family, where batch files need no mode bits.
    pub fn ensure_executable(&self) -> Result<()> {
        if self.family.is_windows() {
            return Ok(());
        }
        set_mode(&self.path)
    }
}

#[cfg(unix)]
fn set_mode(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(WRAPPER_MODE))?;
    tracing::debug!("Set mode {:o} on {}", WRAPPER_MODE, path.display());
    Ok(())
}

#[cfg(not(unix))]
fn set_mode(_path: &Path) -> Result<()> {
    Ok(())
}
