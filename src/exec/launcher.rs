// src/exec/launcher.rs

use std::ffi::OsString;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::{Child, ChildStdin, Command};
use tracing::debug;

use crate::errors::{LaunchError, LaunchResult};
use crate::exec::template;
use crate::exec::LaunchSpec;

/// Launch one subprocess for the given batch of buffered lines.
///
/// Delivery depends on the spec:
/// - not streaming: the batch is joined with newlines and substituted for
///   every `?` in the argument template; the child's stdin is null.
/// - streaming: the template passes through unchanged and the batch is
///   written to the child's stdin (one trailing `\n` per line), after which
///   the pipe is closed to signal end of stream.
///
/// The child inherits the parent's stdout and stderr either way. With
/// `detach` set, the child is started and left behind; otherwise we wait for
/// it and a non-zero exit is an error.
///
/// Errors never abort the caller's loop; they carry the command and argument
/// list so the diagnostic stands on its own.
pub async fn launch_batch(spec: &LaunchSpec, lines: &[Vec<u8>]) -> LaunchResult<()> {
    if spec.command.is_empty() {
        return Ok(());
    }

    let args: Vec<OsString> = if spec.stream {
        spec.arg_template.iter().map(OsString::from).collect()
    } else {
        let joined = template::join_lines(lines);
        template::render_args(&spec.arg_template, &joined)
    };

    debug!(command = %spec.command, ?args, batch = lines.len(), "launching");

    let mut cmd = Command::new(&spec.command);
    cmd.args(&args)
        .stdin(if spec.stream {
            Stdio::piped()
        } else {
            // The parent owns its own stdin; the child must not compete for it.
            Stdio::null()
        })
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = cmd.spawn().map_err(|source| LaunchError::Spawn {
        command: spec.command.clone(),
        args: args_for_diagnostic(&args),
        source,
    })?;

    if spec.stream {
        feed_stdin(spec, lines, &mut child).await?;
    }

    if spec.detach {
        // Dropping the handle leaves the child running; the runtime reaps it
        // in the background once it exits.
        return Ok(());
    }

    let status = child.wait().await.map_err(|source| LaunchError::Wait {
        command: spec.command.clone(),
        args: args_for_diagnostic(&args),
        source,
    })?;

    if !status.success() {
        return Err(LaunchError::Exit {
            command: spec.command.clone(),
            args: args_for_diagnostic(&args),
            code: status.code(),
        });
    }

    Ok(())
}

/// Write every buffered line followed by `\n` to the child's stdin, then
/// close the pipe.
///
/// The pipe is closed on every path, including a write failing partway;
/// otherwise the child would block waiting for more input. Lines already
/// written before a failure are not rolled back.
async fn feed_stdin(spec: &LaunchSpec, lines: &[Vec<u8>], child: &mut Child) -> LaunchResult<()> {
    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| LaunchError::StdinUnavailable {
            command: spec.command.clone(),
        })?;

    let result = write_lines(&mut stdin, lines).await;
    drop(stdin);

    result.map_err(|source| LaunchError::StdinWrite {
        command: spec.command.clone(),
        source,
    })
}

async fn write_lines(stdin: &mut ChildStdin, lines: &[Vec<u8>]) -> std::io::Result<()> {
    for line in lines {
        stdin.write_all(line).await?;
        stdin.write_all(b"\n").await?;
    }
    stdin.flush().await
}

/// Lossy rendering of the argument list for error messages.
fn args_for_diagnostic(args: &[OsString]) -> Vec<String> {
    args.iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}
