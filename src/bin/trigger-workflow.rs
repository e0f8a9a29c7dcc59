//! trigger-workflow entry point.

use std::process::ExitCode;

use apkctl::cli::{Command, TriggerCli, TriggerCommand};
use apkctl::logging::init_tracing;
use apkctl::shell::is_ci;
use apkctl::ui::create_ui;
use clap::Parser;

fn main() -> ExitCode {
    let cli = TriggerCli::parse();
    init_tracing(cli.global.debug);

    tracing::debug!(target: "apkctl", "trigger-workflow starting with args: {:?}", cli);

    // Handle --no-color
    if cli.global.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(!is_ci(), cli.global.output_mode());
    let command = TriggerCommand::new(cli);

    match command.execute(ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
