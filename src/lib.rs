//! gum - Project-aware launcher for Gradle and Maven
//!
//! Runs the right build tool for the directory you are in:
//! - **Gradle** - `gradlew` wrapper or `gradle`, with `-b`/`-c` pointing at
//!   the root build and settings files
//! - **Maven** - `mvnw` wrapper or `mvn`, with `-f` pointing at the root
//!   `pom.xml`
//!
//! ## Features
//!
//! - Upward search for wrappers, build files and settings files
//! - Explicit `-b`, `-c`, `-p` and `-f` always win over discovery
//! - Meta-flags `-gn` (nearest build file), `-gd` (diagnostics) and `-gr`
//!   (toggle task alias rewriting)
//! - Task alias rewriting between Maven phases and Gradle tasks
//! - XDG-compliant layered configuration with a per-project `.gm.toml`

pub mod args;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod resolver;

pub use args::{MetaFlags, TaskAlias};
pub use cli::{Cli, Commands};
pub use command::Command;
pub use config::Config;
pub use error::{LaunchError, NotFound, ResolveError};
pub use executor::{exit_code, launch};
pub use resolver::{
    detect_tool, resolve_tool, BuildTool, DetectionResult, InvocationPlan, OsProbe, PathProbe,
    ResolvedFile, VirtualTree,
};
