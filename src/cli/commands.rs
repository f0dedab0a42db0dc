//! CLI command definitions using clap
//!
//! Launcher options come before the subcommand. Everything after a
//! passthrough subcommand belongs to the build tool, including `-h`.
//! A leading build-tool option with no subcommand (`gm -gn build`,
//! `gm --offline test`) is treated as an implicit `run`.

use std::ffi::OsString;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::resolver::BuildTool;

/// Project-aware launcher for Gradle and Maven.
///
/// Finds the project's wrapper or the installed tool, points it at the right
/// build and settings files, and translates task names between the two.
#[derive(Parser, Debug)]
#[command(name = "gm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the banner and notices
    #[arg(short, long)]
    pub quiet: bool,

    /// Config file path (overrides default XDG paths)
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Launcher switches that take no value
const LAUNCHER_SWITCHES: &[&str] = &["-v", "--verbose", "-q", "--quiet"];

/// Launcher options that stop parsing and print something
const LAUNCHER_INFO: &[&str] = &["-h", "--help", "-V", "--version"];

impl Cli {
    /// Parse the process arguments, inserting an implicit `run` when needed
    pub fn parse_launcher<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(with_implicit_run(args))
    }
}

/// Insert `run` before the first token that is neither a launcher option
/// nor a subcommand but looks like an option
///
/// Bare words are left alone: they are either subcommands or end up in
/// [`Commands::External`].
pub fn with_implicit_run<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let mut index = 1;
    while let Some(arg) = args.get(index) {
        let Some(arg) = arg.to_str() else {
            return args;
        };
        match arg {
            "-c" | "--config" => index += 2,
            _ if arg.starts_with("--config=") => index += 1,
            _ if LAUNCHER_SWITCHES.contains(&arg) => index += 1,
            _ if LAUNCHER_INFO.contains(&arg) => return args,
            _ if arg.starts_with('-') && arg != "-" => break,
            _ => return args,
        }
    }

    if index < args.len() {
        args.insert(index, OsString::from("run"));
    }
    args
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the build tool and run it with the given arguments
    #[command(disable_help_flag = true)]
    Run(PassthroughArgs),

    /// Run Gradle for the current project
    #[command(disable_help_flag = true)]
    Gradle(PassthroughArgs),

    /// Run Maven for the current project
    #[command(disable_help_flag = true)]
    Maven(PassthroughArgs),

    /// Show what would be run, without running it
    Explain(ExplainArgs),

    /// Show the merged configuration for the current project
    Config(ConfigArgs),

    /// Anything else is passed to the detected build tool
    #[command(external_subcommand)]
    External(Vec<String>),
}

impl Commands {
    /// Tool family and arguments for commands that launch a build tool
    ///
    /// `None` for the family means auto-detection.
    pub fn into_launch(self) -> Result<(Option<BuildTool>, Vec<String>), Self> {
        match self {
            Commands::Run(args) => Ok((None, args.args)),
            Commands::Gradle(args) => Ok((Some(BuildTool::Gradle), args.args)),
            Commands::Maven(args) => Ok((Some(BuildTool::Maven), args.args)),
            Commands::External(args) => Ok((None, args)),
            other => Err(other),
        }
    }
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run(PassthroughArgs::default())
    }
}

/// Arguments handed to the build tool untouched
#[derive(Args, Debug, Default)]
pub struct PassthroughArgs {
    /// Tasks and options for the build tool, plus -gn/-gd/-gr
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `explain` subcommand
#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Resolve this tool instead of auto-detecting
    #[arg(long, value_enum)]
    pub tool: Option<BuildTool>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Tasks and options as they would be passed to the build tool
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `config` subcommand
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (TOML for configuration)
    Text,
    /// JSON output
    Json,
}
