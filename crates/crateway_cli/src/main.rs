//! Crateway CLI — the build-loop driver for wasm crates behind a bundler.
//!
//! Provides `crateway build` for freshness-gated compilation and relocation
//! of configured crates, and `crateway status` for inspecting what the next
//! build would do without running it.

#![warn(missing_docs)]

mod build;
mod pipeline;
mod status;

use std::io::IsTerminal;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Crateway — builds wasm crates and relocates them for a web bundler.
#[derive(Parser, Debug)]
#[command(name = "crateway", version, about = "Crateway wasm build pipeline")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `crateway.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build stale crates and relocate their compiled packages.
    Build(BuildArgs),
    /// Report each crate's freshness without building.
    Status(StatusArgs),
}

/// Arguments for the `crateway build` subcommand.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Rebuild every crate even if its artifact is fresh.
    #[arg(long)]
    pub force: bool,

    /// Build only the named crate.
    #[arg(long = "crate")]
    pub only: Option<String>,

    /// Compilation profile passed to the compiler.
    #[arg(short, long, value_enum, default_value_t = BuildProfile::Release)]
    pub profile: BuildProfile,
}

/// Arguments for the `crateway status` subcommand.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Output format for the report.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Compilation profile for the external compiler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BuildProfile {
    /// Fast, unoptimized build with debug assertions.
    Dev,
    /// Optimized build (the compiler's default).
    Release,
    /// Optimized build with debug info for profiling.
    Profiling,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Build(ref args) => build::run(args, &global),
        Command::Status(ref args) => status::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
