//! gm CLI entry point
//!
//! Usage:
//!   gm [ARGS]...             Detect the build tool and run it
//!   gm gradle [ARGS]...      Run Gradle for the current project
//!   gm maven [ARGS]...       Run Maven for the current project
//!   gm explain [ARGS]...     Show what would be run
//!   gm config                Show configuration

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use gum::cli::{
    commands::{ConfigArgs, ExplainArgs, OutputFormat},
    Cli, Commands,
};
use gum::command::Command;
use gum::config::{find_config_files, load_config, Config};
use gum::error::ResolveError;
use gum::executor::{exit_code, launch};
use gum::resolver::{detect_tool, resolve_tool, BuildTool, InvocationPlan, OsProbe, PathProbe};
use gum::MetaFlags;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_launcher(std::env::args_os());

    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            if let Some(hint) = e.downcast_ref::<ResolveError>().and_then(ResolveError::suggestion) {
                eprintln!("{}: {}", "hint".yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so the build tool owns stdout
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = cli.config.as_deref();

    match cli.command.unwrap_or_default().into_launch() {
        Ok((tool, args)) => run_tool(tool, &args, config_path, cli.quiet).await,
        Err(Commands::Explain(args)) => {
            explain(args, config_path)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(Commands::Config(args)) => {
            show_config(args, config_path)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(other) => anyhow::bail!("Unsupported command: {:?}", other),
    }
}

/// Everything decided before launch
struct Prepared {
    plan: InvocationPlan,
    command: Command,
    config: Config,
    meta: MetaFlags,
    available: Vec<BuildTool>,
}

/// Resolve, load the project's config and assemble the command
///
/// With no tool given, families are tried in the configured discovery order.
fn prepare(
    probe: &dyn PathProbe,
    tool: Option<BuildTool>,
    args: &[String],
    config_path: Option<&str>,
) -> Result<Prepared> {
    let (meta, args) = MetaFlags::extract(args);

    let (plan, available) = match tool {
        Some(tool) => (resolve_tool(probe, tool, &args)?, vec![tool]),
        None => {
            let global = load_config(None, config_path)?;
            let detection = detect_tool(probe, &global.general.discovery, &args);
            let plan = detection
                .detected
                .context("No Gradle or Maven project found")?;
            (plan, detection.available)
        }
    };

    tracing::debug!(
        "Resolved {} via {}",
        plan.tool.name(),
        plan.executable.path.display()
    );

    let config = load_config(plan.root_dir.as_deref(), config_path)?;
    let command = Command::assemble(&plan, &meta, &config);

    Ok(Prepared {
        plan,
        command,
        config,
        meta,
        available,
    })
}

/// Resolve and launch a build tool, returning its exit code
async fn run_tool(
    tool: Option<BuildTool>,
    args: &[String],
    config_path: Option<&str>,
    quiet: bool,
) -> Result<ExitCode> {
    let probe = OsProbe::from_env().context("Failed to read the working directory")?;
    let prepared = prepare(&probe, tool, args, config_path)?;
    let command = &prepared.command;
    let quiet = quiet || prepared.config.general.quiet;

    if !quiet {
        for notice in &command.notices {
            println!("{}", notice.yellow());
        }
    }

    if prepared.meta.debug_enabled(prepared.config.general.debug) {
        for line in command.diagnostics() {
            println!("{}", line.dimmed());
        }
        println!();
    }

    if !quiet {
        println!("{}", command.banner_line().cyan());
    }

    let status = launch(command).await?;
    Ok(ExitCode::from(exit_code(status)))
}

/// Show the resolved invocation without running it
fn explain(args: ExplainArgs, config_path: Option<&str>) -> Result<()> {
    let probe = OsProbe::from_env().context("Failed to read the working directory")?;
    let prepared = prepare(&probe, args.tool, &args.args, config_path)?;
    let Prepared {
        plan,
        command,
        meta,
        available,
        ..
    } = prepared;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "plan": plan,
                "meta": meta,
                "available": available,
                "command": command,
                "command_line": command.command_line(),
            }))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{}: {}", "Tool".cyan(), plan.tool);
            println!(
                "{}: {} ({:?})",
                "Executable".cyan(),
                plan.executable.path.display(),
                plan.executable.kind
            );
            println!(
                "{}: {}",
                "Available".cyan(),
                available
                    .iter()
                    .map(|t| t.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            if let Some(ref root) = plan.root_dir {
                println!("{}: {}", "Project root".cyan(), root.display());
            }

            println!();
            for line in command.diagnostics() {
                println!("  {}", line);
            }

            if !command.notices.is_empty() {
                println!();
                for notice in &command.notices {
                    println!("{}", notice.yellow());
                }
            }

            println!();
            println!("{}", command.banner_line());
            println!("{}: {}", "Command".green(), command.command_line());
        }
    }

    Ok(())
}

/// Show the merged configuration for the current project
fn show_config(args: ConfigArgs, config_path: Option<&str>) -> Result<()> {
    let probe = OsProbe::from_env().context("Failed to read the working directory")?;

    let global = load_config(None, config_path)?;
    let project_root = detect_tool(&probe, &global.general.discovery, &[])
        .detected
        .and_then(|plan| plan.root_dir);
    let config = load_config(project_root.as_deref(), config_path)?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let files = find_config_files(project_root.as_deref());
            if files.is_empty() {
                println!("# {}", "No config files found, using defaults".dimmed());
            } else {
                for file in &files {
                    println!("# {}", file.display().to_string().dimmed());
                }
            }
            println!();
            print!(
                "{}",
                toml::to_string_pretty(&config).context("Failed to render configuration")?
            );
        }
    }

    Ok(())
}
