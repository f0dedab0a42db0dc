//! Wrapper and system executable lookup

use std::path::Path;

use crate::error::ResolveError;

use super::search::{find_upward, Candidate};
use super::traits::{BuildTool, Executable, ExecutableKind, ResolveContext};

/// Prefer a wrapper found above `start`, then a system executable
///
/// Falling back to the system executable in strict mode adds a notice that
/// suggests setting up a wrapper.
pub fn locate_executable(
    ctx: &ResolveContext<'_>,
    tool: BuildTool,
    start: &Path,
    notices: &mut Vec<String>,
) -> Result<Executable, ResolveError> {
    let windows = ctx.probe.is_windows();
    let wrapper = tool.wrapper_name(windows);

    if let Ok(path) = find_upward(ctx.probe, start, &[Candidate::File(wrapper)]) {
        return Ok(Executable {
            path,
            kind: ExecutableKind::Wrapper,
        });
    }

    let executable = tool.executable_name(windows);
    match ctx.probe.find_executable(executable) {
        Some(path) => {
            if ctx.strict {
                notices.push(format!(
                    "No {} set up for this project. Please consider setting one up. ({})",
                    wrapper,
                    tool.wrapper_url()
                ));
            }
            Ok(Executable {
                path,
                kind: ExecutableKind::System,
            })
        }
        None => Err(ResolveError::NoExecutable {
            tool,
            wrapper: wrapper.to_string(),
            executable: executable.to_string(),
        }),
    }
}
