//! Configuration model for gum
//!
//! Defines the structure of `.gm.toml` and the layered config files.

use serde::{Deserialize, Serialize};

use crate::args::{AliasTable, TaskAlias};
use crate::resolver::BuildTool;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Settings shared by every tool family
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gradle task aliases
    #[serde(default = "ToolConfig::gradle")]
    pub gradle: ToolConfig,

    /// Maven task aliases
    #[serde(default = "ToolConfig::maven")]
    pub maven: ToolConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            gradle: ToolConfig::gradle(),
            maven: ToolConfig::maven(),
        }
    }
}

impl Config {
    /// Section for a tool family
    pub fn tool(&self, tool: BuildTool) -> &ToolConfig {
        match tool {
            BuildTool::Gradle => &self.gradle,
            BuildTool::Maven => &self.maven,
        }
    }
}

/// Settings shared by every tool family
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Suppress banner and notices
    #[serde(default)]
    pub quiet: bool,

    /// Print the diagnostic dump before launching
    #[serde(default)]
    pub debug: bool,

    /// Tool families tried by auto-detection, first match wins
    #[serde(default = "default_discovery")]
    pub discovery: Vec<BuildTool>,
}

fn default_discovery() -> Vec<BuildTool> {
    vec![BuildTool::Gradle, BuildTool::Maven]
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            debug: false,
            discovery: default_discovery(),
        }
    }
}

/// Alias rewriting for one tool family
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolConfig {
    /// Whether task aliases are rewritten
    #[serde(default = "default_replace")]
    pub replace: bool,

    /// Alias token → replacement tokens
    #[serde(default)]
    pub mappings: AliasTable,
}

fn default_replace() -> bool {
    true
}

impl ToolConfig {
    /// Maven lifecycle names mapped to gradle tasks
    pub fn gradle() -> Self {
        Self::with_mappings(&[
            ("compile", "classes"),
            ("package", "assemble"),
            ("verify", "build"),
            ("install", "publishToMavenLocal"),
            ("deploy", "publish"),
        ])
    }

    /// Gradle task names mapped to maven phases
    pub fn maven() -> Self {
        Self::with_mappings(&[
            ("classes", "compile"),
            ("assemble", "package"),
            ("build", "verify"),
            ("publishToMavenLocal", "install"),
            ("publish", "deploy"),
        ])
    }

    fn with_mappings(pairs: &[(&str, &str)]) -> Self {
        Self {
            replace: default_replace(),
            mappings: pairs
                .iter()
                .map(|(alias, target)| (alias.to_string(), TaskAlias::from(*target)))
                .collect(),
        }
    }
}
