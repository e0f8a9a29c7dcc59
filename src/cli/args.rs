//! CLI argument definitions.
//!
//! This module defines the arguments of both binaries using clap's derive
//! macros: [`BuildCli`] for `build-apk` and [`TriggerCli`] for
//! `trigger-workflow`. Flags shared by both live in [`GlobalArgs`].

use clap::{Args, Parser};
use std::fmt;
use std::path::PathBuf;

use crate::ui::OutputMode;
use crate::workflow::{DEFAULT_API_BASE, DEFAULT_REF, DEFAULT_WORKFLOW};

/// Output and logging flags accepted by every binary.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl GlobalArgs {
    /// Output mode selected by `--verbose` / `--quiet`.
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flags(self.verbose, self.quiet)
    }
}

/// build-apk - Check prerequisites and build the debug APK.
#[derive(Debug, Parser)]
#[command(name = "build-apk")]
#[command(author, version, about, long_about = None)]
pub struct BuildCli {
    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// trigger-workflow - Start the debug APK workflow on GitHub Actions.
#[derive(Clone, Parser)]
#[command(name = "trigger-workflow")]
#[command(author, version, about, long_about = None)]
pub struct TriggerCli {
    /// GitHub repository owner (prompted for when omitted)
    #[arg(long)]
    pub owner: Option<String>,

    /// GitHub repository name (prompted for when omitted)
    #[arg(long)]
    pub repo: Option<String>,

    /// GitHub personal access token (prompted for when omitted)
    #[arg(long)]
    pub token: Option<String>,

    /// Workflow name, file name or id
    #[arg(long, default_value = DEFAULT_WORKFLOW)]
    pub workflow: String,

    /// Branch the workflow runs on
    #[arg(long = "ref", value_name = "REF", default_value = DEFAULT_REF)]
    pub git_ref: String,

    /// GitHub API base URL
    #[arg(long, env = "APKCTL_GITHUB_API_URL", default_value = DEFAULT_API_BASE, hide = true)]
    pub api_url: String,

    #[command(flatten)]
    pub global: GlobalArgs,
}

impl Default for TriggerCli {
    fn default() -> Self {
        Self {
            owner: None,
            repo: None,
            token: None,
            workflow: DEFAULT_WORKFLOW.to_string(),
            git_ref: DEFAULT_REF.to_string(),
            api_url: DEFAULT_API_BASE.to_string(),
            global: GlobalArgs::default(),
        }
    }
}

impl fmt::Debug for TriggerCli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerCli")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("workflow", &self.workflow)
            .field("git_ref", &self.git_ref)
            .field("api_url", &self.api_url)
            .field("global", &self.global)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn build_cli_is_well_formed() {
        BuildCli::command().debug_assert();
    }

    #[test]
    fn trigger_cli_is_well_formed() {
        TriggerCli::command().debug_assert();
    }

    #[test]
    fn build_cli_parses_project() {
        let cli = BuildCli::parse_from(["build-apk", "-p", "/work/browser", "--verbose"]);
        assert_eq!(cli.project, Some(PathBuf::from("/work/browser")));
        assert_eq!(cli.global.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn build_cli_defaults() {
        let cli = BuildCli::parse_from(["build-apk"]);
        assert!(cli.project.is_none());
        assert_eq!(cli.global.output_mode(), OutputMode::Normal);
        assert!(!cli.global.debug);
    }

    #[test]
    fn trigger_cli_defaults() {
        let cli = TriggerCli::parse_from(["trigger-workflow"]);
        assert!(cli.owner.is_none());
        assert!(cli.repo.is_none());
        assert!(cli.token.is_none());
        assert_eq!(cli.workflow, "Build Debug APK");
        assert_eq!(cli.git_ref, "main");
    }

    #[test]
    fn trigger_cli_parses_all_flags() {
        let cli = TriggerCli::parse_from([
            "trigger-workflow",
            "--owner",
            "alice",
            "--repo",
            "browser",
            "--token",
            "ghp_secret",
            "--workflow",
            "build.yml",
            "--ref",
            "develop",
            "--quiet",
        ]);
        assert_eq!(cli.owner.as_deref(), Some("alice"));
        assert_eq!(cli.repo.as_deref(), Some("browser"));
        assert_eq!(cli.token.as_deref(), Some("ghp_secret"));
        assert_eq!(cli.workflow, "build.yml");
        assert_eq!(cli.git_ref, "develop");
        assert_eq!(cli.global.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn trigger_cli_debug_hides_token() {
        let cli = TriggerCli {
            token: Some("ghp_secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", cli);
        assert!(!debug.contains("ghp_secret"));
    }

    #[test]
    fn api_url_is_hidden_from_help() {
        let help = TriggerCli::command().render_help().to_string();
        assert!(!help.contains("--api-url"));
        assert!(help.contains("--owner"));
    }
}
