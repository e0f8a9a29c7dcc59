//! Workflow dispatch over the GitHub REST API.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use std::time::Duration;

use crate::error::Result;
use crate::ui::UserInterface;

use super::request::{WorkflowDispatch, ACCEPT_HEADER, DEFAULT_API_BASE};

/// Status and body of the dispatch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResponse {
    pub status: u16,
    pub body: String,
}

impl DispatchResponse {
    /// 204 No Content is the only success the API defines for dispatches.
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::NO_CONTENT.as_u16()
    }
}

/// Sends workflow dispatch requests.
///
/// Exactly one request per call: no retry, no backoff, no timeout.
pub struct DispatchClient {
    client: Client,
    api_base: String,
}

impl DispatchClient {
    /// Create a client for the public GitHub API.
    pub fn github() -> Result<Self> {
        Self::new(DEFAULT_API_BASE)
    }

    /// Create a client for another API base (GitHub Enterprise, tests).
    pub fn new(api_base: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("apkctl/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.to_string(),
        })
    }

    /// The API base requests are sent to.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Send the dispatch and return whatever the server answered.
    ///
    /// `Err` only for transport failures or an unusable API base.
    pub fn send(&self, request: &WorkflowDispatch) -> Result<DispatchResponse> {
        let url = request.endpoint(&self.api_base)?;
        tracing::debug!("POST {} ({:?})", url, request);

        let response = self
            .client
            .post(url)
            .header(ACCEPT, ACCEPT_HEADER)
            .header(AUTHORIZATION, request.authorization())
            .json(&request.body())
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        tracing::debug!("Dispatch answered {}", status);

        Ok(DispatchResponse { status, body })
    }

    /// Trigger the workflow and report the outcome.
    ///
    /// Returns `true` only for a 204 answer.
    pub fn trigger_workflow(&self, request: &WorkflowDispatch, ui: &mut dyn UserInterface) -> bool {
        match self.send(request) {
            Ok(response) if response.is_success() => {
                ui.success("Workflow triggered successfully!");
                true
            }
            Ok(response) => {
                ui.error(&format!(
                    "Failed to trigger workflow. Status code: {}",
                    response.status
                ));
                ui.error(&format!("Response: {}", response.body));
                false
            }
            Err(e) => {
                ui.error(&format!("Error triggering workflow: {}", e));
                false
            }
        }
    }
}
