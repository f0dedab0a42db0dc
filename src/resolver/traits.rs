//! Common traits and types for build tool resolvers
//!
//! Defines the interface that every tool family (gradle, maven) implements
//! and the plan they produce.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

use super::probe::PathProbe;

/// Result type for resolver operations
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Supported build tool families
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Gradle,
    Maven,
}

impl BuildTool {
    /// Lowercase name used in banners and config sections
    pub fn name(&self) -> &'static str {
        match self {
            BuildTool::Gradle => "gradle",
            BuildTool::Maven => "maven",
        }
    }

    /// Project-local wrapper script name
    pub fn wrapper_name(&self, windows: bool) -> &'static str {
        match (self, windows) {
            (BuildTool::Gradle, false) => "gradlew",
            (BuildTool::Gradle, true) => "gradlew.bat",
            (BuildTool::Maven, false) => "mvnw",
            (BuildTool::Maven, true) => "mvnw.bat",
        }
    }

    /// System-wide executable name
    pub fn executable_name(&self, windows: bool) -> &'static str {
        match (self, windows) {
            (BuildTool::Gradle, false) => "gradle",
            (BuildTool::Gradle, true) => "gradle.bat",
            (BuildTool::Maven, false) => "mvn",
            (BuildTool::Maven, true) => "mvn.bat",
        }
    }

    /// Flag that selects the build file
    pub fn build_file_flag(&self) -> &'static str {
        match self {
            BuildTool::Gradle => "-b",
            BuildTool::Maven => "-f",
        }
    }

    /// Flag that selects the settings file, if the tool has one
    pub fn settings_file_flag(&self) -> Option<&'static str> {
        match self {
            BuildTool::Gradle => Some("-c"),
            BuildTool::Maven => None,
        }
    }

    pub fn install_url(&self) -> &'static str {
        match self {
            BuildTool::Gradle => "https://gradle.org/docs/current/userguide/installation.html",
            BuildTool::Maven => "https://maven.apache.org/download.cgi",
        }
    }

    pub fn wrapper_url(&self) -> &'static str {
        match self {
            BuildTool::Gradle => "https://gradle.org/docs/current/userguide/gradle_wrapper.html",
            BuildTool::Maven => "https://maven.apache.org/wrapper/",
        }
    }
}

impl std::fmt::Display for BuildTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildTool::Gradle => write!(f, "Gradle"),
            BuildTool::Maven => write!(f, "Maven"),
        }
    }
}

/// Where a resolved path came from
///
/// An explicit value always replaces discovery for its axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "source", content = "path", rename_all = "snake_case")]
pub enum ResolvedFile {
    /// Supplied on the command line
    Explicit(PathBuf),
    /// Found by upward search
    Discovered(PathBuf),
    #[default]
    Absent,
}

impl ResolvedFile {
    /// Explicit wins, then discovered, then absent
    pub fn pick(explicit: Option<PathBuf>, discovered: Option<PathBuf>) -> Self {
        match (explicit, discovered) {
            (Some(path), _) => ResolvedFile::Explicit(path),
            (None, Some(path)) => ResolvedFile::Discovered(path),
            (None, None) => ResolvedFile::Absent,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ResolvedFile::Explicit(path) | ResolvedFile::Discovered(path) => Some(path),
            ResolvedFile::Absent => None,
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, ResolvedFile::Explicit(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ResolvedFile::Absent)
    }

    pub fn explicit_path(&self) -> Option<&Path> {
        match self {
            ResolvedFile::Explicit(path) => Some(path),
            _ => None,
        }
    }

    pub fn discovered_path(&self) -> Option<&Path> {
        match self {
            ResolvedFile::Discovered(path) => Some(path),
            _ => None,
        }
    }
}

/// How the executable was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutableKind {
    /// Project-local wrapper script
    Wrapper,
    /// Binary found on the search paths
    System,
}

/// The chosen build tool executable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Executable {
    pub path: PathBuf,
    pub kind: ExecutableKind,
}

/// Everything a resolver decided for one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationPlan {
    pub tool: BuildTool,
    pub executable: Executable,
    /// Gradle `-p` value
    pub project_dir: ResolvedFile,
    pub build_file: ResolvedFile,
    pub root_build_file: ResolvedFile,
    pub settings_file: ResolvedFile,
    /// Directory used to look up project configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<PathBuf>,
    /// User arguments, meta-flags already removed
    pub args: Vec<String>,
    /// Informational messages gathered during resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
}

impl InvocationPlan {
    /// Plan with only an executable; every file axis absent
    pub fn new(tool: BuildTool, executable: Executable, args: Vec<String>) -> Self {
        Self {
            tool,
            executable,
            project_dir: ResolvedFile::Absent,
            build_file: ResolvedFile::Absent,
            root_build_file: ResolvedFile::Absent,
            settings_file: ResolvedFile::Absent,
            root_dir: None,
            args,
            notices: vec![],
        }
    }

    /// Build file to pass to the tool
    ///
    /// Explicit wins. Otherwise the nearest file when `nearest` is set, falling
    /// back to the root file.
    pub fn build_selection(&self, nearest: bool) -> ResolvedFile {
        if self.build_file.is_explicit() {
            return self.build_file.clone();
        }
        let discovered = if nearest {
            self.build_file
                .discovered_path()
                .or(self.root_build_file.discovered_path())
        } else {
            self.root_build_file.discovered_path()
        };
        ResolvedFile::pick(None, discovered.map(Path::to_path_buf))
    }
}

/// Inputs shared by every resolver call
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    pub probe: &'a dyn PathProbe,
    /// Strict resolution turns "nothing found" into an error
    pub strict: bool,
}

impl<'a> ResolveContext<'a> {
    pub fn strict(probe: &'a dyn PathProbe) -> Self {
        Self {
            probe,
            strict: true,
        }
    }

    pub fn best_effort(probe: &'a dyn PathProbe) -> Self {
        Self {
            probe,
            strict: false,
        }
    }

    /// Escalate in strict mode, skip quietly otherwise
    pub fn fail<T>(&self, err: ResolveError) -> ResolveResult<Option<T>> {
        if self.strict {
            Err(err)
        } else {
            tracing::debug!("skipping {}: {}", err.tool().name(), err);
            Ok(None)
        }
    }
}

/// Trait for build tool resolvers
///
/// Each tool family implements this trait to turn the working directory and
/// the user's arguments into an [`InvocationPlan`].
pub trait BuildToolResolver: Send + Sync {
    /// Tool family handled by this resolver
    fn tool(&self) -> BuildTool;

    /// Resolve executable and build files
    ///
    /// # Returns
    /// * `Ok(Some(plan))` - a usable plan
    /// * `Ok(None)` - nothing found, best-effort mode
    ///
    /// # Errors
    /// * `ResolveError::NoExecutable` - no wrapper and no system executable (strict)
    /// * `ResolveError::NoProject` - no build or settings file (strict)
    fn resolve(
        &self,
        ctx: &ResolveContext<'_>,
        args: &[String],
    ) -> ResolveResult<Option<InvocationPlan>>;
}
