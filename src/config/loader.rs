//! Configuration loader with XDG-compliant path resolution
//!
//! Loads configuration from multiple locations with layered priority:
//! 1. `/etc/gum/config.toml` (lowest priority)
//! 2. `~/.config/gum/config.toml`
//! 3. `~/.gm.toml`
//! 4. `<project root>/.gm.toml` (highest priority)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use super::model::Config;

/// Application name used for XDG directories
const APP_NAME: &str = "gum";

/// Per-user and per-project config file name
const PROJECT_FILE: &str = ".gm.toml";

/// Get config search paths in priority order (lowest to highest)
pub fn config_paths(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. System-wide config (lowest priority)
    paths.push(PathBuf::from(format!("/etc/{}/config.toml", APP_NAME)));

    // 2. XDG config home
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_NAME).join("config.toml"));
    }

    // 3. Home directory
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(PROJECT_FILE));
    }

    // 4. Project root (highest priority)
    if let Some(root) = project_root {
        paths.push(root.join(PROJECT_FILE));
    }

    paths
}

/// Load configuration with XDG layering
///
/// Configurations are merged in priority order, with later files
/// overriding earlier ones. Environment variables with prefix
/// `GUM_` override all file-based configuration.
///
/// # Arguments
/// * `project_root` - Directory of the resolved project, if any
/// * `override_path` - Optional path to a config file that takes highest priority
pub fn load_config(project_root: Option<&Path>, override_path: Option<&str>) -> Result<Config> {
    let mut figment = Figment::new();

    // Start with defaults
    figment = figment.merge(Serialized::defaults(Config::default()));

    // Layer configs from lowest to highest priority
    for path in config_paths(project_root) {
        if path.exists() {
            tracing::debug!("Loading config from: {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }
    }

    // Override path takes highest priority (if provided)
    if let Some(path) = override_path {
        let path = PathBuf::from(path);
        if path.exists() {
            tracing::debug!("Loading override config from: {}", path.display());
            figment = figment.merge(Toml::file(&path));
        } else {
            tracing::warn!("Override config not found: {}", path.display());
        }
    }

    // Format: GUM_GENERAL__QUIET=true
    // Maps to: general.quiet = true
    figment = figment.merge(Env::prefixed("GUM_").split("__"));

    let config: Config = figment.extract().context("Failed to load configuration")?;
    for (family, tool) in [("gradle", &config.gradle), ("maven", &config.maven)] {
        for key in tool.mappings.keys().filter(|key| key.starts_with('-')) {
            tracing::warn!("Ignoring {} mapping '{}': options are never rewritten", family, key);
        }
    }
    Ok(config)
}

/// Find all existing config files (for introspection)
pub fn find_config_files(project_root: Option<&Path>) -> Vec<PathBuf> {
    config_paths(project_root)
        .into_iter()
        .filter(|p| p.exists())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::TaskAlias;
    use crate::resolver::BuildTool;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_paths_returns_expected_paths() {
        let paths = config_paths(Some(Path::new("/work/app")));

        // First should be system-wide
        assert!(paths[0].to_string_lossy().contains("/etc/"));

        // Last should be the project file
        assert_eq!(paths.last().unwrap(), &PathBuf::from("/work/app/.gm.toml"));
    }

    #[test]
    fn test_config_paths_without_project() {
        let paths = config_paths(None);

        assert!(paths.iter().all(|p| !p.starts_with("/work")));
    }

    #[test]
    fn test_load_config_from_project_root() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".gm.toml"),
            r#"
            [general]
            discovery = ["maven"]

            [gradle.mappings]
            docs = "javadoc"
            "#,
        )
        .unwrap();

        let config = load_config(Some(dir.path()), None).unwrap();

        assert_eq!(config.general.discovery, vec![BuildTool::Maven]);
        assert_eq!(
            config.gradle.mappings.get("docs"),
            Some(&TaskAlias::from("javadoc"))
        );
        // Default mappings are merged, not replaced
        assert_eq!(
            config.gradle.mappings.get("compile"),
            Some(&TaskAlias::from("classes"))
        );
    }

    #[test]
    fn test_override_beats_project_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".gm.toml"),
            r#"
            [gradle.mappings]
            compile = "compileJava"
            "#,
        )
        .unwrap();
        let override_path = dir.path().join("override.toml");
        fs::write(
            &override_path,
            r#"
            [gradle.mappings]
            compile = "compileKotlin"
            "#,
        )
        .unwrap();

        let config = load_config(Some(dir.path()), Some(override_path.to_str().unwrap())).unwrap();

        assert_eq!(
            config.gradle.mappings.get("compile"),
            Some(&TaskAlias::from("compileKotlin"))
        );
    }

    #[test]
    fn test_missing_override_file_uses_defaults() {
        let config = load_config(None, Some("/nonexistent/config.toml")).unwrap();

        assert_eq!(
            config.maven.mappings.get("classes"),
            Some(&TaskAlias::from("compile"))
        );
    }

    #[test]
    fn test_invalid_project_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gm.toml"), "[general]\nquiet = \"loud\"\n").unwrap();

        assert!(load_config(Some(dir.path()), None).is_err());
    }

    #[test]
    fn test_env_override() {
        // Use a key no other test asserts on
        std::env::set_var("GUM_MAVEN__MAPPINGS__ENVALIAS", "dependency:tree");

        let config = load_config(None, None);

        // Clean up BEFORE assertion to ensure cleanup happens
        std::env::remove_var("GUM_MAVEN__MAPPINGS__ENVALIAS");

        let config = config.unwrap();
        assert_eq!(
            config.maven.mappings.get("envalias"),
            Some(&TaskAlias::from("dependency:tree"))
        );
    }

    #[test]
    fn test_find_config_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gm.toml"), "").unwrap();

        let files = find_config_files(Some(dir.path()));
        assert!(files.contains(&dir.path().join(".gm.toml")));
    }
}
