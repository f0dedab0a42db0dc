//! Configuration module for gum
//!
//! Provides XDG-compliant layered configuration loading, with the project's
//! own `.gm.toml` on top.

pub mod loader;
pub mod model;

pub use loader::{config_paths, find_config_files, load_config};
pub use model::*;
