//! Common test utilities for gum tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Wrapper script that echoes its name and arguments, then exits with `$GM_TEST_EXIT`
pub const ECHO_WRAPPER: &str = r#"#!/bin/sh
echo "${0##*/} $*"
exit "${GM_TEST_EXIT:-0}"
"#;

/// A directory tree on disk, removed when dropped
pub struct ProjectTree {
    _dir: TempDir,
    root: PathBuf,
}

impl ProjectTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        // Canonical so paths match what the process sees as its cwd
        let root = dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        Self { _dir: dir, root }
    }

    /// Absolute path of `rel` inside the tree
    pub fn path(&self, rel: &str) -> PathBuf {
        if rel.is_empty() {
            self.root.clone()
        } else {
            self.root.join(rel)
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create an empty file (and its parent directories)
    pub fn file(self, rel: &str) -> Self {
        self.write(rel, "")
    }

    /// Create a file with content
    pub fn write(self, rel: &str, content: &str) -> Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        self
    }

    /// Create a directory
    pub fn dir(self, rel: &str) -> Self {
        std::fs::create_dir_all(self.path(rel)).expect("Failed to create directory");
        self
    }

    /// Create an executable script
    pub fn script(self, rel: &str, content: &str) -> Self {
        let tree = self.write(rel, content);
        let path = tree.path(rel);

        // Make script executable on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)
                .expect("Failed to get metadata")
                .permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&path, perms).expect("Failed to set permissions");
        }

        tree
    }
}

/// Gradle multi-project: wrapper, settings and build file at the root, plus a child build
pub fn gradle_multi_project() -> ProjectTree {
    ProjectTree::new()
        .script("gradlew", ECHO_WRAPPER)
        .file("settings.gradle")
        .file("build.gradle")
        .file("app/build.gradle")
        .dir("app/src/main")
}

/// Maven multi-module: wrapper and parent pom at the root, plus a module pom
pub fn maven_multi_module() -> ProjectTree {
    ProjectTree::new()
        .script("mvnw", ECHO_WRAPPER)
        .file("pom.xml")
        .file("core/pom.xml")
        .dir("core/src/main")
}

/// Creates a temporary directory with no build files
pub fn create_empty_project() -> ProjectTree {
    ProjectTree::new()
}
