//! Gradle resolver
//!
//! Resolves `gradlew`/`gradle`, the nearest and root build files and the
//! settings file.
//!
//! # Precedence
//!
//! 1. `-p/--project-dir` stops all file discovery
//! 2. `-b/--build-file` replaces build file discovery; settings are still
//!    discovered unless `-c/--settings-file` is given
//! 3. Otherwise the nearest build file, the settings file and the root build
//!    file are searched upward from the working directory. The root search
//!    never leaves the directory holding the settings file.

use std::path::{Path, PathBuf};

use crate::args::flags;

use super::executable::locate_executable;
use super::probe::PathProbe;
use super::search::{
    find_root, find_upward, GRADLE_BUILD_FILES, GRADLE_ROOT_FILES, GRADLE_SETTINGS_FILES,
};
use super::traits::{
    BuildTool, BuildToolResolver, InvocationPlan, ResolveContext, ResolveResult, ResolvedFile,
};
use crate::error::ResolveError;

/// Resolver for Gradle projects
#[derive(Debug, Default, Clone, Copy)]
pub struct GradleResolver;

impl GradleResolver {
    pub fn new() -> Self {
        Self
    }
}

impl BuildToolResolver for GradleResolver {
    fn tool(&self) -> BuildTool {
        BuildTool::Gradle
    }

    fn resolve(
        &self,
        ctx: &ResolveContext<'_>,
        args: &[String],
    ) -> ResolveResult<Option<InvocationPlan>> {
        let probe = ctx.probe;
        let pwd = probe.working_dir();

        let explicit_project_dir = flags::explicit_path(args, flags::PROJECT_DIR, &pwd);
        let explicit_build = flags::explicit_path(args, flags::BUILD_FILE, &pwd);
        let explicit_settings = flags::explicit_path(args, flags::SETTINGS_FILE, &pwd);

        let mut notices = Vec::new();
        let wrapper_start = explicit_project_dir.as_deref().unwrap_or(&pwd);
        let executable = match locate_executable(ctx, self.tool(), wrapper_start, &mut notices) {
            Ok(executable) => executable,
            Err(err) => return ctx.fail(err),
        };

        let mut plan = InvocationPlan::new(self.tool(), executable, args.to_vec());
        plan.notices = notices;

        if let Some(dir) = explicit_project_dir {
            plan.root_dir = probe.exists(&dir).then(|| dir.clone());
            plan.project_dir = ResolvedFile::Explicit(dir);
            return Ok(Some(plan));
        }

        let settings = find_upward(probe, &pwd, GRADLE_SETTINGS_FILES).ok();

        if let Some(build) = explicit_build {
            plan.build_file = ResolvedFile::Explicit(build);
            plan.settings_file = ResolvedFile::pick(explicit_settings, settings);
            plan.root_dir = project_root(probe, &plan);
            return Ok(Some(plan));
        }

        let nearest = find_upward(probe, &pwd, GRADLE_BUILD_FILES).ok();
        let boundary = settings.as_deref().and_then(Path::parent);
        let root = match find_root(probe, &pwd, GRADLE_ROOT_FILES, boundary) {
            Ok(root) => Some(root),
            Err(e) => {
                tracing::debug!("{}; using nearest build file as root", e);
                nearest.clone()
            }
        };

        plan.settings_file = ResolvedFile::pick(explicit_settings, settings);

        if nearest.is_none() {
            let notice = match &plan.settings_file {
                ResolvedFile::Explicit(path) => format!(
                    "Did not find a suitable Gradle build file but {} is specified",
                    path.display()
                ),
                ResolvedFile::Discovered(path) => format!(
                    "Did not find a suitable Gradle build file but found {}",
                    path.display()
                ),
                ResolvedFile::Absent => {
                    return ctx.fail(ResolveError::NoProject { tool: self.tool() })
                }
            };
            plan.notices.push(notice);
        }

        plan.build_file = ResolvedFile::pick(None, nearest_below_root(&pwd, nearest, &root));
        plan.root_build_file = ResolvedFile::pick(None, root);
        plan.root_dir = project_root(probe, &plan);
        Ok(Some(plan))
    }
}

/// The nearest build file, unless the upward walk only reached the root file
///
/// A build file in the working directory always counts as nearest, even
/// when it is also the root.
fn nearest_below_root(
    pwd: &Path,
    nearest: Option<PathBuf>,
    root: &Option<PathBuf>,
) -> Option<PathBuf> {
    nearest.filter(|path| path.parent() == Some(pwd) || root.as_ref() != Some(path))
}

/// Directory whose `.gm.toml` applies to this plan
fn project_root(probe: &dyn PathProbe, plan: &InvocationPlan) -> Option<PathBuf> {
    parent_dir(existing(probe, plan.build_file.explicit_path()))
        .or_else(|| parent_dir(plan.root_build_file.path()))
        .or_else(|| parent_dir(existing(probe, plan.settings_file.explicit_path())))
        .or_else(|| parent_dir(plan.settings_file.discovered_path()))
        .or_else(|| parent_dir(plan.build_file.discovered_path()))
}

fn existing<'a>(probe: &dyn PathProbe, path: Option<&'a Path>) -> Option<&'a Path> {
    path.filter(|p| probe.exists(p))
}

fn parent_dir(path: Option<&Path>) -> Option<PathBuf> {
    path.and_then(Path::parent).map(Path::to_path_buf)
}
