//! Subcommand implementations.

pub mod init;
pub mod lint;
pub mod output;
pub mod rules;
