//! Trigger command implementation.
//!
//! `trigger-workflow` collects the repository coordinates and token, then
//! asks GitHub Actions to start the debug APK workflow.

use crate::cli::args::TriggerCli;
use crate::error::{ApkctlError, Result};
use crate::ui::{hints, Prompt, UserInterface};
use crate::workflow::{DispatchClient, WorkflowDispatch, WEB_BASE};

use super::command::{Command, CommandResult};

/// Banner printed before anything else.
pub const TRIGGER_BANNER: &str = "MyAgenticBrowser GitHub Actions Trigger Script";

/// The trigger command implementation.
pub struct TriggerCommand {
    args: TriggerCli,
}

impl TriggerCommand {
    /// Create a new trigger command.
    pub fn new(args: TriggerCli) -> Self {
        Self { args }
    }

    /// Resolve owner, repository and token from flags or prompts.
    ///
    /// Each value is checked as soon as it is known, so an empty owner
    /// stops before the repository is asked for.
    pub fn collect_inputs(&self, ui: &mut dyn UserInterface) -> Result<WorkflowDispatch> {
        let owner = require(
            ui,
            self.args.owner.as_deref(),
            Prompt::input(
                "owner",
                "Enter GitHub repository owner (username or organization)",
            ),
            "Repository owner",
        )?;
        let repo = require(
            ui,
            self.args.repo.as_deref(),
            Prompt::input("repo", "Enter GitHub repository name"),
            "Repository name",
        )?;
        let token = require(
            ui,
            self.args.token.as_deref(),
            Prompt::password("token", "Enter GitHub personal access token"),
            "GitHub token",
        )?;

        Ok(WorkflowDispatch::new(&owner, &repo, &token, &self.args.workflow)
            .with_ref(&self.args.git_ref))
    }
}

fn require(
    ui: &mut dyn UserInterface,
    flag: Option<&str>,
    prompt: Prompt,
    field: &str,
) -> Result<String> {
    // An empty flag counts as not given.
    let value = match flag.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => value.to_string(),
        None => ui.prompt(&prompt)?,
    };

    let value = value.trim();
    if value.is_empty() {
        return Err(ApkctlError::MissingInput {
            field: field.to_string(),
        });
    }
    Ok(value.to_string())
}

impl Command for TriggerCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header(TRIGGER_BANNER);

        let request = match self.collect_inputs(ui) {
            Ok(request) => request,
            Err(e @ ApkctlError::MissingInput { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        ui.message(&format!(
            "Triggering workflow '{}' for {}/{}...",
            request.workflow, request.owner, request.repo
        ));

        let client = DispatchClient::new(&self.args.api_url)?;
        if !client.trigger_workflow(&request, ui) {
            return Ok(CommandResult::failure(1));
        }

        ui.show_hint(&hints::monitor_actions(
            WEB_BASE,
            &request.owner,
            &request.repo,
        ));
        ui.show_hint(hints::download_artifact());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use httpmock::prelude::*;

    const PATH: &str = "/repos/alice/browser/actions/workflows/build.yml/dispatches";

    fn args(server: &MockServer) -> TriggerCli {
        TriggerCli {
            workflow: "build.yml".to_string(),
            api_url: server.base_url(),
            ..Default::default()
        }
    }

    fn answer_all(ui: &mut MockUI) {
        ui.set_prompt_response("owner", "alice");
        ui.set_prompt_response("repo", "browser");
        ui.set_prompt_response("token", "ghp_secret");
    }

    #[test]
    fn prompts_in_order_and_triggers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path(PATH)
                .header("authorization", "token ghp_secret")
                .json_body(serde_json::json!({"ref": "main"}));
            then.status(204);
        });

        let cmd = TriggerCommand::new(args(&server));
        let mut ui = MockUI::new();
        answer_all(&mut ui);

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert_eq!(ui.prompts_shown(), ["owner", "repo", "token"]);
        assert_eq!(ui.headers(), ["MyAgenticBrowser GitHub Actions Trigger Script"]);
        assert!(ui.has_message("Triggering workflow 'build.yml' for alice/browser..."));
        assert!(ui.has_hint(
            "Go to https://github.com/alice/browser/actions to monitor the build progress."
        ));
        assert!(ui.has_hint("download the APK from the Artifacts section"));
        mock.assert_calls(1);
    }

    #[test]
    fn empty_owner_stops_before_other_prompts() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST);
            then.status(204);
        });

        let cmd = TriggerCommand::new(args(&server));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result, CommandResult::failure(1));
        assert!(ui.has_error("Repository owner is required"));
        assert_eq!(ui.prompts_shown(), ["owner"]);
        mock.assert_calls(0);
    }

    #[test]
    fn blank_repo_is_reported_distinctly() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST);
            then.status(204);
        });

        let cmd = TriggerCommand::new(args(&server));
        let mut ui = MockUI::new();
        ui.set_prompt_response("owner", "alice");
        ui.set_prompt_response("repo", "   ");

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Repository name is required"));
        assert!(!ui.has_error("Repository owner is required"));
        mock.assert_calls(0);
    }

    #[test]
    fn empty_token_is_reported_distinctly() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST);
            then.status(204);
        });

        let cmd = TriggerCommand::new(args(&server));
        let mut ui = MockUI::new();
        ui.set_prompt_response("owner", "alice");
        ui.set_prompt_response("repo", "browser");

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("GitHub token is required"));
        mock.assert_calls(0);
    }

    #[test]
    fn flags_skip_prompts() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path(PATH);
            then.status(204);
        });

        let cmd = TriggerCommand::new(TriggerCli {
            owner: Some("alice".to_string()),
            repo: Some("browser".to_string()),
            token: Some("ghp_secret".to_string()),
            ..args(&server)
        });
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).unwrap().success);
        assert!(ui.prompts_shown().is_empty());
        mock.assert_calls(1);
    }

    #[test]
    fn empty_flags_fall_back_to_prompts() {
        let cmd = TriggerCommand::new(TriggerCli {
            owner: Some(String::new()),
            repo: Some("  ".to_string()),
            token: Some("ghp_secret".to_string()),
            ..Default::default()
        });
        let mut ui = MockUI::new();
        ui.set_prompt_response("owner", "alice");
        ui.set_prompt_response("repo", "browser");

        let request = cmd.collect_inputs(&mut ui).unwrap();
        assert_eq!(ui.prompts_shown(), ["owner", "repo"]);
        assert_eq!(request.owner, "alice");
        assert_eq!(request.repo, "browser");
        assert_eq!(request.token, "ghp_secret");
    }

    #[test]
    fn inputs_are_trimmed() {
        let cmd = TriggerCommand::new(TriggerCli::default());
        let mut ui = MockUI::new();
        ui.set_prompt_response("owner", "  alice ");
        ui.set_prompt_response("repo", "browser\t");
        ui.set_prompt_response("token", " ghp_secret ");

        let request = cmd.collect_inputs(&mut ui).unwrap();
        assert_eq!(request.owner, "alice");
        assert_eq!(request.repo, "browser");
        assert_eq!(request.token, "ghp_secret");
        assert_eq!(request.workflow, "Build Debug APK");
        assert_eq!(request.git_ref, "main");
    }

    #[test]
    fn rejected_dispatch_exits_one_without_hints() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path(PATH);
            then.status(401).body("Bad credentials");
        });

        let cmd = TriggerCommand::new(args(&server));
        let mut ui = MockUI::new();
        answer_all(&mut ui);

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result, CommandResult::failure(1));
        assert!(ui.has_error("Status code: 401"));
        assert!(ui.has_error("Bad credentials"));
        assert!(ui.hints().is_empty());
        mock.assert_calls(1);
    }
}
