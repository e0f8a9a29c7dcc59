//! Contextual hint text shown after a run.

/// Shown when a mandatory prerequisite is missing.
pub fn after_failed_prerequisites() -> &'static str {
    "Please install the required prerequisites and try again."
}

/// Shown after the workflow was dispatched.
pub fn monitor_actions(web_base: &str, owner: &str, repo: &str) -> String {
    format!(
        "Go to {}/{}/{}/actions to monitor the build progress.",
        web_base.trim_end_matches('/'),
        owner,
        repo
    )
}

/// Shown after the workflow was dispatched, under the monitor hint.
pub fn download_artifact() -> &'static str {
    "Once completed, you can download the APK from the Artifacts section."
}
