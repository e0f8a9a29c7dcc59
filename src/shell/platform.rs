//! Host platform detection.

use std::path::Path;

/// Operating system family, as far as script conventions go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostFamily {
    /// Windows: batch files, no Unix permission bits.
    Windows,
    /// Everything else: shell scripts with an executable bit.
    Unix,
}

impl HostFamily {
    /// The family this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            HostFamily::Windows
        } else {
            HostFamily::Unix
        }
    }

    /// Whether this is the Windows family.
    pub fn is_windows(self) -> bool {
        matches!(self, HostFamily::Windows)
    }
}

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in the binaries.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Read-only view of the process environment and filesystem.
///
/// The SDK root check reads a variable and then probes a path; routing both
/// through this trait lets tests observe which one happened first.
pub trait HostEnv {
    /// Value of an environment variable, if set and valid unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// Whether `path` exists.
    fn path_exists(&self, path: &Path) -> bool;
}

/// The real environment of this process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostEnv for SystemHost {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
