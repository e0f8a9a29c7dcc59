//! Command-line interface for apkctl.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{BuildCli, GlobalArgs, TriggerCli};
pub use commands::{BuildCommand, Command, CommandResult, TriggerCommand};
