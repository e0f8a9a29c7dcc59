//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use apkctl::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("owner", "alice");
//!
//! // Use ui in code under test...
//! let owner = ui.prompt(&Prompt::input("owner", "Owner")).unwrap();
//! ui.success("Workflow triggered successfully!");
//!
//! // Assert on captured interactions
//! assert_eq!(owner, "alice");
//! assert!(ui.has_success("triggered"));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;

use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

type SpinnerLog = Rc<RefCell<Vec<(SpinnerStatus, String)>>>;

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
/// Spinner results are recorded as successes and errors so assertions do not
/// depend on whether an operation ran under a spinner.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    spinners: Vec<String>,
    error_blocks: Vec<(String, String, Option<String>)>,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
    spinner_log: SpinnerLog,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    ///
    /// When `prompt()` is called with this key, it returns the configured response.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages, including finished spinners.
    pub fn successes(&self) -> Vec<String> {
        let mut all = self.successes.clone();
        all.extend(self.spinner_results(SpinnerStatus::Success));
        all
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages, including failed spinners.
    pub fn errors(&self) -> Vec<String> {
        let mut all = self.errors.clone();
        all.extend(self.spinner_results(SpinnerStatus::Error));
        all
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all captured error blocks as (command, output, hint).
    pub fn error_blocks(&self) -> &[(String, String, Option<String>)] {
        &self.error_blocks
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    fn spinner_results(&self, status: SpinnerStatus) -> Vec<String> {
        self.spinner_log
            .borrow()
            .iter()
            .filter(|(s, _)| *s == status)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(response.clone());
        }

        Ok(prompt.default.clone().unwrap_or_default())
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            log: Some(self.spinner_log.clone()),
            ..MockSpinner::default()
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        self.error_blocks.push((
            command.to_string(),
            output.to_string(),
            hint.map(|h| h.to_string()),
        ));
        if let Some(h) = hint {
            self.hints.push(h.to_string());
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Mock spinner that captures finish messages.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
    log: Option<SpinnerLog>,
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all messages set during spinning.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get the final finish message.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    /// Get the final status.
    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }

    fn finish(&mut self, status: SpinnerStatus, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(status);
        if let Some(log) = &self.log {
            log.borrow_mut().push((status, msg.to_string()));
        }
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Success, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Error, msg);
    }
}
