//! # Command Implementations
//!
//! Each submodule handles one CLI command.

pub mod check;
pub mod convert;
pub mod rank;
pub mod repl;
