//! CLI command implementations.

pub mod init;
pub mod layout;
pub mod simulate;
