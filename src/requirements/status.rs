//! Prerequisite check results.
//!
//! Each check produces a [`CheckResult`]; the [`PrerequisiteReport`] decides
//! whether the build may proceed.

/// How much a failing check matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Failure blocks the build.
    Mandatory,
    /// Failure is reported but the build can continue.
    Optional,
}

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// The prerequisite is present.
    Passed {
        /// Line shown to the operator.
        detail: String,
    },
    /// The prerequisite is missing or unusable.
    Failed {
        /// Line shown to the operator.
        reason: String,
    },
}

/// The result of checking one prerequisite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Short identifier of the check ("runtime", "sdk_root", "build_tool").
    pub name: &'static str,
    /// Whether a failure blocks the build.
    pub severity: Severity,
    /// What the check found.
    pub status: CheckStatus,
}

impl CheckResult {
    /// Create a passing result.
    pub fn passed(name: &'static str, severity: Severity, detail: impl Into<String>) -> Self {
        Self {
            name,
            severity,
            status: CheckStatus::Passed {
                detail: detail.into(),
            },
        }
    }

    /// Create a failing result.
    pub fn failed(name: &'static str, severity: Severity, reason: impl Into<String>) -> Self {
        Self {
            name,
            severity,
            status: CheckStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    /// Whether the prerequisite is present.
    pub fn is_passed(&self) -> bool {
        matches!(self.status, CheckStatus::Passed { .. })
    }

    /// Whether this result stops the build.
    pub fn is_blocking(&self) -> bool {
        !self.is_passed() && self.severity == Severity::Mandatory
    }
}

/// All check results of one run, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerequisiteReport {
    pub results: Vec<CheckResult>,
}

impl PrerequisiteReport {
    /// True unless a mandatory check failed.
    pub fn passed(&self) -> bool {
        !self.results.iter().any(CheckResult::is_blocking)
    }

    /// Names of the mandatory checks that failed.
    pub fn blockers(&self) -> Vec<&'static str> {
        self.results
            .iter()
            .filter(|r| r.is_blocking())
            .map(|r| r.name)
            .collect()
    }
}
