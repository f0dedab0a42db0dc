//! Child process launch
//!
//! Hands the terminal over to the build tool:
//! - Inherited stdin/stdout/stderr
//! - Ctrl-C absorbed by the launcher while the child runs
//! - Exit status propagated to the caller

use std::process::{ExitStatus, Stdio};

use tokio::process::Command as ChildCommand;

use crate::command::Command;
use crate::error::LaunchError;

/// Run the command to completion
///
/// The child runs in the launcher's working directory. Interrupts are left
/// to the child, which shares the terminal's process group.
///
/// # Errors
/// * `LaunchError::SpawnFailed` - If the executable couldn't be started
/// * `LaunchError::Io` - If waiting on the child failed
pub async fn launch(command: &Command) -> Result<ExitStatus, LaunchError> {
    let command_str = command.command_line();

    let mut cmd = ChildCommand::new(&command.executable);
    cmd.args(&command.args);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    cmd.kill_on_drop(true);

    tracing::debug!("Launching: {}", command_str);

    let mut child = cmd.spawn().map_err(|e| LaunchError::SpawnFailed {
        command: command_str,
        error: e.to_string(),
    })?;

    loop {
        tokio::select! {
            status = child.wait() => {
                let status = status?;
                tracing::debug!("{} exited with {}", command.tool.name(), status);
                return Ok(status);
            }
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    tracing::debug!("Ctrl-C handler unavailable: {}", e);
                    return Ok(child.wait().await?);
                }
                tracing::debug!("Interrupt received, waiting for {}", command.tool.name());
            }
        }
    }
}

/// Launcher exit code for a finished child
///
/// A child killed by a signal has no code and maps to failure.
pub fn exit_code(status: ExitStatus) -> u8 {
    match status.code() {
        Some(code) => u8::try_from(code).unwrap_or(1),
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::args::MetaFlags;
    use crate::config::Config;
    use crate::resolver::{BuildTool, Executable, ExecutableKind, InvocationPlan};

    fn shell(script: &str) -> Command {
        let plan = InvocationPlan::new(
            BuildTool::Maven,
            Executable {
                path: PathBuf::from("sh"),
                kind: ExecutableKind::System,
            },
            vec!["-c".to_string(), script.to_string()],
        );
        Command::assemble(&plan, &MetaFlags::default(), &Config::default())
    }

    #[tokio::test]
    async fn test_launch_success() {
        match launch(&shell("exit 0")).await {
            Ok(status) => {
                assert!(status.success());
                assert_eq!(exit_code(status), 0);
            }
            Err(LaunchError::SpawnFailed { .. }) => {
                eprintln!("Skipping test: sh not available");
            }
            Err(e) => panic!("Unexpected error: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_launch_propagates_exit_code() {
        match launch(&shell("exit 3")).await {
            Ok(status) => {
                assert!(!status.success());
                assert_eq!(exit_code(status), 3);
            }
            Err(LaunchError::SpawnFailed { .. }) => {
                eprintln!("Skipping test: sh not available");
            }
            Err(e) => panic!("Unexpected error: {:?}", e),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_signal_death_is_failure() {
        match launch(&shell("kill -9 $$")).await {
            Ok(status) => {
                assert!(status.code().is_none());
                assert_eq!(exit_code(status), 1);
            }
            Err(LaunchError::SpawnFailed { .. }) => {
                eprintln!("Skipping test: sh not available");
            }
            Err(e) => panic!("Unexpected error: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_launch_spawn_failed() {
        let plan = InvocationPlan::new(
            BuildTool::Gradle,
            Executable {
                path: PathBuf::from("/nonexistent/gradlew_12345"),
                kind: ExecutableKind::Wrapper,
            },
            vec![],
        );
        let command = Command::assemble(&plan, &MetaFlags::default(), &Config::default());

        match launch(&command).await {
            Err(LaunchError::SpawnFailed { command, .. }) => {
                assert!(command.contains("gradlew_12345"));
            }
            other => panic!("Expected SpawnFailed error, got {:?}", other),
        }
    }
}
