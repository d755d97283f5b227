//! CLI command handlers

pub mod commands;

pub use commands::{generate, init_config, list, load_config, progress};
