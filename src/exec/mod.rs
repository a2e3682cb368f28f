//! External command execution

pub mod subprocess;
