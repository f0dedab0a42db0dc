//! Error types for gum
//!
//! Resolution failures carry a suggestion pointing at the tool's install or
//! wrapper documentation.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::resolver::BuildTool;

/// An upward search reached the filesystem root without a match
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("none of [{candidates}] found above {}", start.display())]
pub struct NotFound {
    pub start: PathBuf,
    pub candidates: String,
}

impl NotFound {
    pub fn new(start: &Path, candidates: impl Into<String>) -> Self {
        Self {
            start: start.to_path_buf(),
            candidates: candidates.into(),
        }
    }
}

/// Terminal failures for a single build tool family
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Neither the wrapper nor the system executable could be located
    #[error("No {executable} found in path. Please install {tool}.")]
    NoExecutable {
        tool: BuildTool,
        wrapper: String,
        executable: String,
    },

    /// No build file and no settings file anywhere up the tree
    #[error("No {tool} project found")]
    NoProject { tool: BuildTool },
}

impl ResolveError {
    pub fn tool(&self) -> BuildTool {
        match self {
            ResolveError::NoExecutable { tool, .. } => *tool,
            ResolveError::NoProject { tool } => *tool,
        }
    }

    /// Hint shown below the error message
    pub fn suggestion(&self) -> Option<String> {
        match self {
            ResolveError::NoExecutable { tool, wrapper, .. } => Some(format!(
                "Install {} ({}) or add a {} to the project",
                tool,
                tool.install_url(),
                wrapper
            )),
            ResolveError::NoProject { tool } => match tool {
                BuildTool::Gradle => Some(
                    "Add a build.gradle(.kts) or settings.gradle(.kts), or pass -b/-c/-p"
                        .to_string(),
                ),
                BuildTool::Maven => Some("Add a pom.xml, or pass -f".to_string()),
            },
        }
    }
}

/// Failures while handing the command over to the child process
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Failed to spawn the command
    #[error("Failed to spawn command: {command}")]
    SpawnFailed { command: String, error: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
