//! Filesystem and environment probing
//!
//! Everything the resolvers know about the outside world comes through
//! [`PathProbe`], so resolution can run against a synthetic tree in tests.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Source of filesystem truth for the resolvers
#[cfg_attr(test, mockall::automock)]
pub trait PathProbe {
    /// Whether `path` exists. I/O errors count as "does not exist".
    fn exists(&self, path: &Path) -> bool;

    /// Absolute directory resolution starts from
    fn working_dir(&self) -> PathBuf;

    /// PATH-like directories searched for system executables, in order
    fn search_paths(&self) -> Vec<PathBuf>;

    /// Selects `.bat` executable names
    fn is_windows(&self) -> bool;

    /// Find `name` in the first search path that contains it
    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        self.search_paths()
            .into_iter()
            .map(|dir| dir.join(name))
            .find(|candidate| self.exists(candidate))
    }
}

/// Probe backed by the real filesystem and the process environment
#[derive(Debug, Clone)]
pub struct OsProbe {
    working_dir: PathBuf,
    search_paths: Vec<PathBuf>,
}

impl OsProbe {
    /// Build a probe from the current directory and `PATH`
    pub fn from_env() -> std::io::Result<Self> {
        let working_dir = std::env::current_dir()?;
        let search_paths = std::env::var_os("PATH")
            .map(|paths| std::env::split_paths(&paths).collect())
            .unwrap_or_default();
        Ok(Self::new(working_dir, search_paths))
    }

    pub fn new(working_dir: impl Into<PathBuf>, search_paths: Vec<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            search_paths,
        }
    }
}

impl PathProbe for OsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn working_dir(&self) -> PathBuf {
        self.working_dir.clone()
    }

    fn search_paths(&self) -> Vec<PathBuf> {
        self.search_paths.clone()
    }

    fn is_windows(&self) -> bool {
        cfg!(windows)
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        let paths = std::env::join_paths(&self.search_paths).ok()?;
        match which::which_in(name, Some(paths), &self.working_dir) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!("{} not found on search paths: {}", name, e);
                None
            }
        }
    }
}

/// In-memory directory tree
///
/// Only the registered paths exist. Directories are implied and never need
/// to be added for lookups to work.
#[derive(Debug, Clone, Default)]
pub struct VirtualTree {
    files: HashSet<PathBuf>,
    working_dir: PathBuf,
    search_paths: Vec<PathBuf>,
    windows: bool,
}

impl VirtualTree {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            ..Default::default()
        }
    }

    /// Register a file
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    /// Append a search path directory
    pub fn with_search_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_paths.push(dir.into());
        self
    }

    pub fn windows(mut self, windows: bool) -> Self {
        self.windows = windows;
        self
    }
}

impl PathProbe for VirtualTree {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn working_dir(&self) -> PathBuf {
        self.working_dir.clone()
    }

    fn search_paths(&self) -> Vec<PathBuf> {
        self.search_paths.clone()
    }

    fn is_windows(&self) -> bool {
        self.windows
    }
}

/// Make `value` absolute against `base` and drop `.`/`..` components
pub fn absolutize(base: &Path, value: impl AsRef<Path>) -> PathBuf {
    let joined = base.join(value);
    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
