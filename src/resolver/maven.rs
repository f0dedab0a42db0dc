//! Maven resolver
//!
//! Resolves `mvnw`/`mvn` and the nearest and root `pom.xml`. The root is the
//! first `pom.xml` above the working directory; there is no settings file and
//! no search boundary.

use std::path::Path;

use crate::args::flags;
use crate::error::ResolveError;

use super::executable::locate_executable;
use super::search::{find_upward, MAVEN_BUILD_FILES};
use super::traits::{
    BuildTool, BuildToolResolver, InvocationPlan, ResolveContext, ResolveResult, ResolvedFile,
};

/// Resolver for Maven projects
#[derive(Debug, Default, Clone, Copy)]
pub struct MavenResolver;

impl MavenResolver {
    pub fn new() -> Self {
        Self
    }
}

impl BuildToolResolver for MavenResolver {
    fn tool(&self) -> BuildTool {
        BuildTool::Maven
    }

    fn resolve(
        &self,
        ctx: &ResolveContext<'_>,
        args: &[String],
    ) -> ResolveResult<Option<InvocationPlan>> {
        let probe = ctx.probe;
        let pwd = probe.working_dir();

        let mut notices = Vec::new();
        let executable = match locate_executable(ctx, self.tool(), &pwd, &mut notices) {
            Ok(executable) => executable,
            Err(err) => return ctx.fail(err),
        };

        let mut plan = InvocationPlan::new(self.tool(), executable, args.to_vec());
        plan.notices = notices;

        if let Some(pom) = flags::explicit_path(args, flags::POM_FILE, &pwd) {
            plan.root_dir = pom
                .parent()
                .filter(|_| probe.exists(&pom))
                .map(Path::to_path_buf);
            plan.build_file = ResolvedFile::Explicit(pom);
            return Ok(Some(plan));
        }

        let nearest = match find_upward(probe, &pwd, MAVEN_BUILD_FILES) {
            Ok(pom) => pom,
            Err(_) => return ctx.fail(ResolveError::NoProject { tool: self.tool() }),
        };
        let root = pwd
            .parent()
            .and_then(|parent| find_upward(probe, parent, MAVEN_BUILD_FILES).ok())
            .unwrap_or_else(|| nearest.clone());

        plan.root_dir = root.parent().map(Path::to_path_buf);
        plan.build_file = ResolvedFile::Discovered(nearest);
        plan.root_build_file = ResolvedFile::Discovered(root);
        Ok(Some(plan))
    }
}
