//! Command execution module
//!
//! Launches the assembled build tool command with the terminal attached and
//! maps its exit status.

pub mod runner;

pub use runner::*;
