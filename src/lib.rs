// src/lib.rs

pub mod cli;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;

use std::time::Duration;

use anyhow::Result;
use tokio::io::BufReader;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::engine::run_loop;
use crate::exec::{LaunchSpec, ProcessLauncher};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the launch spec built from the CLI
/// - the real process launcher backend
/// - the accumulator loop over the process's stdin
///
/// Individual launch failures are diagnostics, not errors: they are logged
/// inside the loop and this function still returns `Ok`, so the program
/// exits 0 as long as input could be read.
pub async fn run(args: CliArgs) -> Result<()> {
    let spec = launch_spec_from_args(&args);

    if spec.command.is_empty() {
        debug!("no command given; input will be consumed and discarded");
    }

    let interval = Duration::from_millis(args.throttle);
    let mut backend = ProcessLauncher::new(spec);
    let reader = BufReader::new(tokio::io::stdin());

    let stats = run_loop(reader, interval, &mut backend).await?;

    info!(
        lines = stats.lines_read,
        flushes = stats.flushes,
        failed = stats.failed_launches,
        "input exhausted"
    );

    Ok(())
}

/// Split the trailing positionals into command + argument template.
fn launch_spec_from_args(args: &CliArgs) -> LaunchSpec {
    let mut positionals = args.command.iter();
    let command = positionals.next().cloned().unwrap_or_default();

    LaunchSpec {
        command,
        arg_template: positionals.cloned().collect(),
        stream: args.pipe,
        detach: args.detach,
    }
}
