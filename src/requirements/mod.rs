//! Build prerequisite detection.
//!
//! This module checks whether the local machine has what the Android build
//! needs before the Gradle wrapper is started.
//!
//! # Modules
//!
//! - [`checker`] - The prerequisite checks and their console reporting
//! - [`status`] - Check result types and the overall verdict

pub mod checker;
pub mod status;

pub use checker::{extract_version, PrerequisiteChecker, SDK_ROOT_VAR};
pub use status::{CheckResult, CheckStatus, PrerequisiteReport, Severity};
