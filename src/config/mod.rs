//! Configuration management
//!
//! This module holds the process-wide settings for the converter: the
//! directory it runs in and the fixed input/output file names.

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG, INPUT_FILE, OUTPUT_FILE};
