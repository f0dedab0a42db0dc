//! Build tool auto-detection
//!
//! Tries each tool family in the configured discovery order without failing
//! on missing executables or projects. The first family that yields a plan
//! wins.

use serde::Serialize;

use crate::error::ResolveError;

use super::gradle::GradleResolver;
use super::maven::MavenResolver;
use super::probe::PathProbe;
use super::traits::{BuildTool, BuildToolResolver, InvocationPlan, ResolveContext, ResolveResult};

/// Result of build tool detection
#[derive(Debug, Clone, Serialize, Default)]
pub struct DetectionResult {
    /// Plan of the first family that resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected: Option<InvocationPlan>,
    /// Every family that resolved, in discovery order
    pub available: Vec<BuildTool>,
}

/// Resolver for a tool family
pub fn resolver_for(tool: BuildTool) -> Box<dyn BuildToolResolver> {
    match tool {
        BuildTool::Gradle => Box::new(GradleResolver::new()),
        BuildTool::Maven => Box::new(MavenResolver::new()),
    }
}

/// Detect which tool family applies to the working directory
///
/// # Arguments
/// * `probe` - Filesystem and environment
/// * `order` - Discovery order, first match wins
/// * `args` - User arguments, meta-flags removed
pub fn detect_tool(
    probe: &dyn PathProbe,
    order: &[BuildTool],
    args: &[String],
) -> DetectionResult {
    let ctx = ResolveContext::best_effort(probe);
    let mut result = DetectionResult::default();

    for tool in order {
        if result.available.contains(tool) {
            tracing::warn!("Duplicate build tool in discovery order: {}", tool.name());
            continue;
        }
        match resolver_for(*tool).resolve(&ctx, args) {
            Ok(Some(plan)) => {
                result.available.push(*tool);
                if result.detected.is_none() {
                    result.detected = Some(plan);
                }
            }
            Ok(None) => {}
            Err(e) => tracing::debug!("{} not usable: {}", tool.name(), e),
        }
    }

    result
}

/// Resolve one family, failing when nothing usable is found
pub fn resolve_tool(
    probe: &dyn PathProbe,
    tool: BuildTool,
    args: &[String],
) -> ResolveResult<InvocationPlan> {
    resolver_for(tool)
        .resolve(&ResolveContext::strict(probe), args)?
        .ok_or(ResolveError::NoProject { tool })
}
