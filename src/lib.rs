//! apkctl - Build and CI trigger tooling for the MyAgenticBrowser Android app.
//!
//! Two binaries share this library:
//!
//! - `build-apk` checks the local toolchain and builds the debug APK with
//!   the project's Gradle wrapper.
//! - `trigger-workflow` asks GitHub Actions to build the APK remotely.
//!
//! # Modules
//!
//! - [`build`] - Gradle wrapper invocation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Tracing subscriber setup
//! - [`requirements`] - Prerequisite checks
//! - [`shell`] - Process execution and host environment
//! - [`ui`] - Prompts, spinners, and terminal output
//! - [`workflow`] - GitHub Actions workflow dispatch
//!
//! # Example
//!
//! ```
//! use apkctl::workflow::{WorkflowDispatch, DEFAULT_API_BASE, DEFAULT_WORKFLOW};
//!
//! let request = WorkflowDispatch::new("alice", "browser", "ghp_token", DEFAULT_WORKFLOW);
//! let url = request.endpoint(DEFAULT_API_BASE).unwrap();
//! assert_eq!(
//!     url.as_str(),
//!     "https://api.github.com/repos/alice/browser/actions/workflows/Build%20Debug%20APK/dispatches"
//! );
//! ```

pub mod build;
pub mod cli;
pub mod error;
pub mod logging;
pub mod requirements;
pub mod shell;
pub mod ui;
pub mod workflow;

pub use error::{ApkctlError, Result};
