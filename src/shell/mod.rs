//! Process execution and host environment access.

pub mod command;
pub mod platform;
pub mod scripted;

pub use command::{CommandResult, ProcessRunner, SystemRunner};
pub use platform::{is_ci, HostEnv, HostFamily, SystemHost};
pub use scripted::ScriptedRunner;
