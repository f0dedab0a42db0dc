//! Argument handling
//!
//! - Tool-selection flag lookup (`-b`, `-c`, `-p`, `-f`)
//! - Launcher meta-flags (`-gn`, `-gd`, `-gr`)
//! - Task alias rewriting

pub mod flags;
pub mod meta;
pub mod rewrite;

pub use meta::MetaFlags;
pub use rewrite::{rewrite, AliasTable, TaskAlias};
