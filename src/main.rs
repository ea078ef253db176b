//! kprof-top CLI
//!
//! Runs a bounded kernel sampling session and prints the hottest symbols.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;

use kprof_top::commands::{
    execute_capture, execute_report, validate_args, validate_report_args, CaptureArgs,
    OutputFormat, RenderOptions, ReportArgs,
};
use kprof_top::utils::config::{parse_duration, DTRACE_ENV, DTRACE_PATH};

/// kprof-top - rank kernel symbols by sampled call count
#[derive(Parser, Debug)]
#[command(name = "kprof-top")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Subcommand to execute (defaults to capture)
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    capture: CaptureOpts,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sample the kernel and print the hottest symbols
    Capture(CaptureOpts),

    /// Render previously captured profiler output
    Report {
        /// Captured profiler output (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        render: RenderOpts,
    },
}

#[derive(Args, Debug)]
struct CaptureOpts {
    /// Trace duration (e.g. 5s, 500ms, 2m)
    #[arg(short, long, default_value = "5s", value_parser = parse_duration)]
    duration: Duration,

    /// DTrace executable
    #[arg(long, env = DTRACE_ENV, default_value = DTRACE_PATH)]
    dtrace: PathBuf,

    /// Also save the raw profiler output to this file
    #[arg(long)]
    save_raw: Option<PathBuf>,

    #[command(flatten)]
    render: RenderOpts,
}

#[derive(Args, Debug)]
struct RenderOpts {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Only print the N hottest symbols
    #[arg(long)]
    top: Option<usize>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl From<RenderOpts> for RenderOptions {
    fn from(opts: RenderOpts) -> Self {
        Self {
            format: opts.format,
            top: opts.top,
            output: opts.output,
        }
    }
}

impl From<CaptureOpts> for CaptureArgs {
    fn from(opts: CaptureOpts) -> Self {
        Self {
            dtrace: opts.dtrace,
            duration: opts.duration,
            save_raw: opts.save_raw,
            render: opts.render.into(),
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command.unwrap_or(Commands::Capture(cli.capture)) {
        Commands::Capture(opts) => {
            let args = CaptureArgs::from(opts);
            validate_args(&args)?;
            execute_capture(args)?;
        }

        Commands::Report { input, render } => {
            let args = ReportArgs {
                input,
                render: render.into(),
            };
            validate_report_args(&args)?;
            execute_report(args)?;
        }
    }

    Ok(())
}
