// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `linerun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "linerun",
    version,
    about = "Launch a command per stdin line, or per throttled batch of lines.",
    long_about = "Launch a command per stdin line, or per throttled batch of lines.\n\n\
        Typical use:\n  \
        producer | linerun [OPTIONS] command -opt1 -opt2 ?\n  \
        producer | linerun --pipe [OPTIONS] command -opt1 -opt2\n\n\
        Without --pipe, every `?` in the command's arguments is replaced by the\n\
        buffered input (lines joined with newlines). With --pipe, the buffered\n\
        lines are written to the command's stdin instead."
)]
pub struct CliArgs {
    /// Launch each command without waiting for it to finish.
    #[arg(long = "async")]
    pub detach: bool,

    /// Write buffered lines to the command's stdin instead of substituting `?`.
    #[arg(long)]
    pub pipe: bool,

    /// Minimum interval (ms) between launches; input is buffered in between.
    ///
    /// 0 disables throttling: every input line launches immediately.
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub throttle: u64,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LINERUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Command to launch followed by its argument template.
    ///
    /// Everything after the command is passed through to the child, including
    /// hyphen-leading arguments. With no command at all, input is consumed
    /// and discarded.
    #[arg(
        value_name = "COMMAND [ARGS]...",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
