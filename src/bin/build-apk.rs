//! build-apk entry point.

use std::process::ExitCode;

use apkctl::cli::{BuildCli, BuildCommand, Command};
use apkctl::logging::init_tracing;
use apkctl::ApkctlError;
use apkctl::shell::is_ci;
use apkctl::ui::create_ui;
use clap::Parser;

fn main() -> ExitCode {
    let cli = BuildCli::parse();
    init_tracing(cli.global.debug);

    tracing::debug!(target: "apkctl", "build-apk starting with args: {:?}", cli);

    // Handle --no-color
    if cli.global.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(!is_ci(), cli.global.output_mode());

    // Determine project root
    let project_root = match cli.project.clone() {
        Some(path) => Ok(path),
        None => std::env::current_dir(),
    };

    let result = project_root
        .map_err(ApkctlError::from)
        .and_then(|root| BuildCommand::new(&root))
        .and_then(|command| command.execute(ui.as_mut()));

    match result {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
