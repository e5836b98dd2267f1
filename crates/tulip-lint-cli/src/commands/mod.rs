//! Subcommand implementations.

pub mod check;
pub mod discover;
pub mod init;
pub mod list_rules;
pub mod output;
