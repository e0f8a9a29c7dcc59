//! Local debug APK build.
//!
//! - [`wrapper`] - Locating the Gradle wrapper and making it executable
//! - [`orchestrator`] - Running the wrapper and reporting the result

pub mod orchestrator;
pub mod wrapper;

pub use orchestrator::BuildOrchestrator;
pub use wrapper::{GradleWrapper, ARTIFACT_PATH, BUILD_TASK};
