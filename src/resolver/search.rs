//! Upward directory search
//!
//! Walks from a start directory toward the filesystem root, trying an ordered
//! list of candidate file names in each directory. The filesystem root itself
//! is never probed.

use std::path::{Path, PathBuf};

use crate::error::NotFound;

use super::probe::PathProbe;

/// A file name tried inside one directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// Fixed file name, e.g. `build.gradle`
    File(&'static str),
    /// Directory name plus suffix, e.g. `core/` + `.gradle` = `core.gradle`
    DirNamed(&'static str),
}

impl Candidate {
    /// File name this candidate stands for inside `dir`
    pub fn file_name(&self, dir: &Path) -> Option<String> {
        match self {
            Candidate::File(name) => Some((*name).to_string()),
            Candidate::DirNamed(suffix) => dir
                .file_name()
                .map(|name| format!("{}{}", name.to_string_lossy(), suffix)),
        }
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Candidate::File(name) => write!(f, "{}", name),
            Candidate::DirNamed(suffix) => write!(f, "<dirname>{}", suffix),
        }
    }
}

pub const GRADLE_BUILD_FILES: &[Candidate] = &[
    Candidate::File("build.gradle"),
    Candidate::File("build.gradle.kts"),
    Candidate::DirNamed(".gradle"),
    Candidate::DirNamed(".gradle.kts"),
];

pub const GRADLE_SETTINGS_FILES: &[Candidate] = &[
    Candidate::File("settings.gradle"),
    Candidate::File("settings.gradle.kts"),
];

pub const GRADLE_ROOT_FILES: &[Candidate] = &[
    Candidate::File("build.gradle"),
    Candidate::File("build.gradle.kts"),
];

pub const MAVEN_BUILD_FILES: &[Candidate] = &[Candidate::File("pom.xml")];

/// Find the first candidate in `start` or any of its ancestors
pub fn find_upward(
    probe: &dyn PathProbe,
    start: &Path,
    candidates: &[Candidate],
) -> Result<PathBuf, NotFound> {
    let mut dir = start;
    while let Some(parent) = dir.parent() {
        if let Some((_, found)) = first_match(probe, dir, candidates) {
            tracing::debug!("found {}", found.display());
            return Ok(found);
        }
        dir = parent;
    }
    Err(not_found(start, candidates))
}

/// Find the topmost file of a chain of same-named files
///
/// A match in `dir` is only the root when `parent(dir)` does not hold the
/// same file name. With a `boundary`, directories outside its subtree are
/// never probed.
pub fn find_root(
    probe: &dyn PathProbe,
    start: &Path,
    candidates: &[Candidate],
    boundary: Option<&Path>,
) -> Result<PathBuf, NotFound> {
    let within = |dir: &Path| boundary.map_or(true, |b| dir.starts_with(b));

    let mut dir = start;
    while let Some(parent) = dir.parent() {
        if !within(dir) {
            tracing::debug!(
                "root search for {} stopped at boundary {}",
                start.display(),
                boundary.map(|b| b.display().to_string()).unwrap_or_default()
            );
            break;
        }

        if let Some((name, found)) = first_match(probe, dir, candidates) {
            let chain_continues = parent.parent().is_some()
                && within(parent)
                && probe.exists(&parent.join(&name));
            if !chain_continues {
                tracing::debug!("root file {}", found.display());
                return Ok(found);
            }
        }
        dir = parent;
    }
    Err(not_found(start, candidates))
}

fn first_match(
    probe: &dyn PathProbe,
    dir: &Path,
    candidates: &[Candidate],
) -> Option<(String, PathBuf)> {
    candidates.iter().find_map(|candidate| {
        let name = candidate.file_name(dir)?;
        let path = dir.join(&name);
        probe.exists(&path).then_some((name, path))
    })
}

fn not_found(start: &Path, candidates: &[Candidate]) -> NotFound {
    let names = candidates
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    NotFound::new(start, names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::probe::{MockPathProbe, VirtualTree};

    #[test]
    fn test_candidate_file_name() {
        let dir = Path::new("/p/core");

        assert_eq!(
            Candidate::File("build.gradle").file_name(dir),
            Some("build.gradle".to_string())
        );
        assert_eq!(
            Candidate::DirNamed(".gradle.kts").file_name(dir),
            Some("core.gradle.kts".to_string())
        );
        assert_eq!(Candidate::DirNamed(".gradle").file_name(Path::new("/")), None);
    }

    #[test]
    fn test_find_upward_in_start_dir() {
        let tree = VirtualTree::new("/p").with_file("/p/build.gradle");

        let found = find_upward(&tree, Path::new("/p"), GRADLE_BUILD_FILES).unwrap();
        assert_eq!(found, PathBuf::from("/p/build.gradle"));
    }

    #[test]
    fn test_find_upward_in_ancestor() {
        let tree = VirtualTree::new("/p/a/b").with_file("/p/settings.gradle.kts");

        let found = find_upward(&tree, Path::new("/p/a/b"), GRADLE_SETTINGS_FILES).unwrap();
        assert_eq!(found, PathBuf::from("/p/settings.gradle.kts"));
    }

    #[test]
    fn test_find_upward_candidate_order_within_directory() {
        let tree = VirtualTree::new("/p/core")
            .with_file("/p/core/core.gradle")
            .with_file("/p/core/build.gradle.kts");

        let found = find_upward(&tree, Path::new("/p/core"), GRADLE_BUILD_FILES).unwrap();
        assert_eq!(found, PathBuf::from("/p/core/build.gradle.kts"));
    }

    #[test]
    fn test_find_upward_nearest_directory_beats_priority() {
        let tree = VirtualTree::new("/p/core")
            .with_file("/p/core/core.gradle")
            .with_file("/p/build.gradle");

        let found = find_upward(&tree, Path::new("/p/core"), GRADLE_BUILD_FILES).unwrap();
        assert_eq!(found, PathBuf::from("/p/core/core.gradle"));
    }

    #[test]
    fn test_find_upward_never_probes_filesystem_root() {
        let tree = VirtualTree::new("/p").with_file("/pom.xml");

        let err = find_upward(&tree, Path::new("/p"), MAVEN_BUILD_FILES).unwrap_err();
        assert_eq!(err.start, PathBuf::from("/p"));
        assert_eq!(err.candidates, "pom.xml");
    }

    #[test]
    fn test_find_upward_probes_each_directory_once() {
        let mut probe = MockPathProbe::new();
        probe
            .expect_exists()
            .withf(|p| p == Path::new("/a/b/pom.xml"))
            .times(1)
            .return_const(false);
        probe
            .expect_exists()
            .withf(|p| p == Path::new("/a/pom.xml"))
            .times(1)
            .return_const(false);

        let result = find_upward(&probe, Path::new("/a/b"), MAVEN_BUILD_FILES);
        assert!(result.is_err());
    }

    #[test]
    fn test_find_root_single_file() {
        let tree = VirtualTree::new("/p").with_file("/p/build.gradle");

        let root = find_root(&tree, Path::new("/p"), GRADLE_ROOT_FILES, None).unwrap();
        assert_eq!(root, PathBuf::from("/p/build.gradle"));
    }

    #[test]
    fn test_find_root_follows_chain() {
        let tree = VirtualTree::new("/w/p/a/b")
            .with_file("/w/p/a/b/build.gradle")
            .with_file("/w/p/a/build.gradle")
            .with_file("/w/p/build.gradle");

        let root = find_root(&tree, Path::new("/w/p/a/b"), GRADLE_ROOT_FILES, None).unwrap();
        assert_eq!(root, PathBuf::from("/w/p/build.gradle"));
    }

    #[test]
    fn test_find_root_chain_breaks_on_gap() {
        let tree = VirtualTree::new("/w/p/a/b")
            .with_file("/w/p/a/b/build.gradle")
            .with_file("/w/p/build.gradle");

        let root = find_root(&tree, Path::new("/w/p/a/b"), GRADLE_ROOT_FILES, None).unwrap();
        assert_eq!(root, PathBuf::from("/w/p/a/b/build.gradle"));
    }

    #[test]
    fn test_find_root_chain_requires_same_name() {
        let tree = VirtualTree::new("/w/p/a")
            .with_file("/w/p/a/build.gradle.kts")
            .with_file("/w/p/build.gradle");

        let root = find_root(&tree, Path::new("/w/p/a"), GRADLE_ROOT_FILES, None).unwrap();
        assert_eq!(root, PathBuf::from("/w/p/a/build.gradle.kts"));
    }

    #[test]
    fn test_find_root_skips_directories_without_file() {
        let tree = VirtualTree::new("/w/p/child").with_file("/w/p/build.gradle");

        let root = find_root(&tree, Path::new("/w/p/child"), GRADLE_ROOT_FILES, None).unwrap();
        assert_eq!(root, PathBuf::from("/w/p/build.gradle"));
    }

    #[test]
    fn test_find_root_boundary_stops_chain() {
        let tree = VirtualTree::new("/w/p/child")
            .with_file("/w/p/child/build.gradle")
            .with_file("/w/p/build.gradle");

        let root = find_root(
            &tree,
            Path::new("/w/p/child"),
            GRADLE_ROOT_FILES,
            Some(Path::new("/w/p/child")),
        )
        .unwrap();
        assert_eq!(root, PathBuf::from("/w/p/child/build.gradle"));
    }

    #[test]
    fn test_find_root_boundary_prevents_escape() {
        let tree = VirtualTree::new("/w/p/child").with_file("/w/build.gradle");

        let err = find_root(
            &tree,
            Path::new("/w/p/child"),
            GRADLE_ROOT_FILES,
            Some(Path::new("/w/p")),
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_find_root_boundary_directory_is_probed() {
        let tree = VirtualTree::new("/w/p/a/b").with_file("/w/p/build.gradle");

        let root = find_root(
            &tree,
            Path::new("/w/p/a/b"),
            GRADLE_ROOT_FILES,
            Some(Path::new("/w/p")),
        )
        .unwrap();
        assert_eq!(root, PathBuf::from("/w/p/build.gradle"));
    }
}
