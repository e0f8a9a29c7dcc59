//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Every binary builds exactly one command from its parsed arguments and
//! executes it against the UI chosen for the run:
//! - `build-apk` runs [`BuildCommand`]
//! - `trigger-workflow` runs [`TriggerCommand`]

pub mod build;
pub mod command;
pub mod trigger;

pub use build::BuildCommand;
pub use command::{Command, CommandResult};
pub use trigger::TriggerCommand;
