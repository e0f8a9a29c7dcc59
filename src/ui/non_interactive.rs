//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};

use crate::error::Result;

use super::{ApkctlTheme, OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts ahead of time.
pub const PROMPT_ENV_PREFIX: &str = "APKCTL_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered, in order, from `APKCTL_PROMPT_<KEY>` variables,
/// from the prompt's default, and finally from one line of input (stdin
/// unless replaced with [`with_input`](Self::with_input)). End of input
/// yields an empty answer.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    input: Box<dyn BufRead>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI reading from stdin.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
            input: Box::new(BufReader::new(std::io::stdin())),
        }
    }

    /// Create with explicit overrides and input (for testing).
    pub fn with_input(
        mode: OutputMode,
        overrides: HashMap<String, String>,
        input: Box<dyn BufRead>,
    ) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            input,
        }
    }

    fn read_answer(&mut self, question: &str) -> Result<String> {
        if self.mode.shows_status() {
            print!("{}: ", question);
            std::io::stdout().flush().ok();
        }
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        if self.mode.shows_status() && !line.ends_with('\n') {
            println!();
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return Ok(value.clone());
        }

        if let Some(default) = &prompt.default {
            return Ok(default.clone());
        }

        self.read_answer(&prompt.question)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("{}", message);
        }
        Box::new(NoopSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", title);
            println!("{}", "=".repeat(title.chars().count()));
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("{}", hint);
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        eprintln!();
        eprint!(
            "{}",
            ApkctlTheme::plain().format_error_block(command, output, hint)
        );
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that only prints the final line (for non-interactive mode).
struct NoopSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
