//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

use crate::error::{ApkctlError, Result};

use super::{Prompt, PromptType};

/// Convert dialoguer errors to ApkctlError.
fn map_dialoguer_err(e: dialoguer::Error) -> ApkctlError {
    ApkctlError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input on a terminal.
///
/// Empty answers are accepted; callers decide whether a value is required.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    match prompt.prompt_type {
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Password => prompt_password(prompt, term),
    }
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<String> {
    let theme = prompt_theme();
    let input = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true);

    let result = if let Some(default) = &prompt.default {
        input
            .default(default.clone())
            .interact_text_on(term)
            .map_err(map_dialoguer_err)?
    } else {
        input.interact_text_on(term).map_err(map_dialoguer_err)?
    };

    Ok(result)
}

fn prompt_password(prompt: &Prompt, term: &Term) -> Result<String> {
    let theme = prompt_theme();
    Password::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty_password(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}
