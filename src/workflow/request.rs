//! Workflow dispatch request.

use reqwest::Url;
use serde::Serialize;
use std::fmt;

use crate::error::{ApkctlError, Result};

/// GitHub REST API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// GitHub web UI base, used for the follow-up link.
pub const WEB_BASE: &str = "https://github.com";

/// Workflow started when `--workflow` is not given.
pub const DEFAULT_WORKFLOW: &str = "Build Debug APK";

/// Branch the workflow runs on.
pub const DEFAULT_REF: &str = "main";

/// Accept header pinning the REST API version.
pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// One request to start a workflow.
#[derive(Clone, PartialEq, Eq)]
pub struct WorkflowDispatch {
    pub owner: String,
    pub repo: String,
    pub token: String,
    /// Workflow file name, id or display name.
    pub workflow: String,
    /// Branch or tag the run targets.
    pub git_ref: String,
}

/// JSON body of the dispatch call.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DispatchBody<'a> {
    #[serde(rename = "ref")]
    pub git_ref: &'a str,
}

impl WorkflowDispatch {
    /// Dispatch `workflow` on the default branch.
    pub fn new(owner: &str, repo: &str, token: &str, workflow: &str) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: token.to_string(),
            workflow: workflow.to_string(),
            git_ref: DEFAULT_REF.to_string(),
        }
    }

    /// Target another branch or tag.
    pub fn with_ref(mut self, git_ref: &str) -> Self {
        self.git_ref = git_ref.to_string();
        self
    }

    /// `{api_base}/repos/{owner}/{repo}/actions/workflows/{workflow}/dispatches`.
    ///
    /// Owner, repo and workflow are percent-encoded as single path segments.
    pub fn endpoint(&self, api_base: &str) -> Result<Url> {
        let mut url = Url::parse(api_base).map_err(|e| ApkctlError::InvalidEndpoint {
            message: format!("{}: {}", api_base, e),
        })?;

        url.path_segments_mut()
            .map_err(|_| ApkctlError::InvalidEndpoint {
                message: format!("{} cannot be used as a base URL", api_base),
            })?
            .pop_if_empty()
            .extend([
                "repos",
                self.owner.as_str(),
                self.repo.as_str(),
                "actions",
                "workflows",
                self.workflow.as_str(),
                "dispatches",
            ]);

        Ok(url)
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("token {}", self.token)
    }

    /// Request body naming the target branch.
    pub fn body(&self) -> DispatchBody<'_> {
        DispatchBody {
            git_ref: &self.git_ref,
        }
    }

    /// Actions page for the repository in the web UI.
    pub fn actions_page(&self) -> String {
        format!("{}/{}/{}/actions", WEB_BASE, self.owner, self.repo)
    }
}

impl fmt::Debug for WorkflowDispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkflowDispatch")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &"<redacted>")
            .field("workflow", &self.workflow)
            .field("git_ref", &self.git_ref)
            .finish()
    }
}
