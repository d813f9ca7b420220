//! Command handlers. Each submodule owns one subcommand's execution.

pub mod completions;
pub mod entity;
pub mod init;
pub mod list;
