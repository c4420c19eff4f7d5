//! Command-line interface
//!
//! This module contains the CLI commands and argument parsing
//! for the converter binary.

pub mod commands;
pub mod input;

pub use commands::{Command, Opt};
pub use input::read_first_line;
