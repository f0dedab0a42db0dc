//! CLI module for gum
//!
//! Provides the `gm` command-line interface:
//! - `run` - Detect the build tool and run it
//! - `gradle` / `maven` - Run a specific build tool
//! - `explain` - Show the resolved invocation
//! - `config` - Show configuration

pub mod commands;

pub use commands::{Cli, Commands};
