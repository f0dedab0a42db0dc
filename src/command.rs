//! Final command assembly
//!
//! Turns an [`InvocationPlan`] into the executable, argument vector, banner
//! and diagnostic dump that the binary prints and launches.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::args::{rewrite, MetaFlags};
use crate::config::Config;
use crate::resolver::{BuildTool, InvocationPlan, ResolvedFile};

/// A ready-to-launch build tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub tool: BuildTool,
    pub executable: PathBuf,
    /// Injected file flags followed by the rewritten user arguments
    pub args: Vec<String>,
    /// Banner clauses, joined with spaces when printed
    pub banner: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
    #[serde(skip)]
    diagnostics: Vec<(&'static str, String)>,
}

impl Command {
    /// Assemble the command for a resolved plan
    ///
    /// The same build file selection feeds the banner and the injected flag.
    /// Explicit paths are already among the user's arguments, so they only
    /// show up in the banner.
    pub fn assemble(plan: &InvocationPlan, meta: &MetaFlags, config: &Config) -> Self {
        let tool = plan.tool;
        let mut banner = vec![format!(
            "Using {} at '{}'",
            tool.name(),
            plan.executable.path.display()
        )];
        let mut args = Vec::new();

        if let Some(dir) = plan.project_dir.explicit_path() {
            banner.push(format!("to run project at '{}':", dir.display()));
        } else {
            let selection = plan.build_selection(meta.nearest);
            if let Some(path) = selection.discovered_path() {
                push_flag(&mut args, tool.build_file_flag(), path);
            }
            if let Some(path) = selection.path() {
                banner.push(format!("to run buildFile '{}':", path.display()));
            }
            let build_clause = !selection.is_absent();

            match &plan.settings_file {
                ResolvedFile::Explicit(path) => {
                    if !build_clause {
                        banner.push(settings_clause(path));
                    }
                }
                ResolvedFile::Discovered(path) => {
                    if let Some(flag) = tool.settings_file_flag() {
                        push_flag(&mut args, flag, path);
                    }
                    if !build_clause {
                        banner.push(settings_clause(path));
                    }
                }
                ResolvedFile::Absent => {}
            }
        }

        let section = config.tool(tool);
        let replace = meta.rewrite_enabled(section.replace);
        let rewritten = rewrite(&plan.args, &section.mappings, replace);
        args.extend(rewritten.iter().cloned());

        let mut diagnostics = vec![
            ("nearest", meta.nearest.to_string()),
            ("rootBuildFile", describe(&plan.root_build_file)),
            ("buildFile", describe(&plan.build_file)),
        ];
        if tool.settings_file_flag().is_some() {
            diagnostics.push(("settingsFile", describe(&plan.settings_file)));
        }
        diagnostics.push(("explicitBuildFile", display_opt(plan.build_file.explicit_path())));
        if tool.settings_file_flag().is_some() {
            diagnostics.push((
                "explicitSettingsFile",
                display_opt(plan.settings_file.explicit_path()),
            ));
            diagnostics.push((
                "explicitProjectDir",
                display_opt(plan.project_dir.explicit_path()),
            ));
        }
        diagnostics.push(("original args", format!("{:?}", plan.args)));
        if replace {
            diagnostics.push(("replaced args", format!("{:?}", rewritten)));
        }
        diagnostics.push(("actual args", format!("{:?}", args)));

        Self {
            tool,
            executable: plan.executable.path.clone(),
            args,
            banner,
            notices: plan.notices.clone(),
            diagnostics,
        }
    }

    /// Banner as a single line
    pub fn banner_line(&self) -> String {
        self.banner.join(" ")
    }

    /// Diagnostic dump, one `label = value` line per field
    pub fn diagnostics(&self) -> Vec<String> {
        let width = self
            .diagnostics
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);
        self.diagnostics
            .iter()
            .map(|(label, value)| format!("{:<width$} = {}", label, value, width = width))
            .collect()
    }

    /// Shell-like rendering of the command, for display only
    pub fn command_line(&self) -> String {
        std::iter::once(self.executable.display().to_string())
            .chain(self.args.iter().map(|arg| quote(arg)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn push_flag(args: &mut Vec<String>, flag: &str, path: &Path) {
    args.push(flag.to_string());
    args.push(path.display().to_string());
}

fn settings_clause(path: &Path) -> String {
    format!("with settings at '{}':", path.display())
}

fn describe(file: &ResolvedFile) -> String {
    display_opt(file.path())
}

fn display_opt(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.contains(char::is_whitespace) {
        format!("'{}'", arg)
    } else {
        arg.to_string()
    }
}
