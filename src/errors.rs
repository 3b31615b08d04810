// src/errors.rs

//! Crate-wide error types.
//!
//! Launch failures are deliberately non-fatal: the accumulator loop logs them
//! and keeps reading. `LaunchError` captures enough context (command, argument
//! list, cause) for the diagnostic to stand on its own.

use thiserror::Error;

/// Everything that can go wrong with a single launch attempt.
///
/// One variant per failure class: the process could not be created, its stdin
/// could not be fed (streaming mode), or it ran and reported failure
/// (synchronous mode). None of these unwind the main loop.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("failed launching (command: {command}, args: {args:?}): {source}")]
    Spawn {
        command: String,
        args: Vec<String>,
        #[source]
        source: std::io::Error,
    },

    #[error("failed launching (command: {command}): stdin pipe unavailable")]
    StdinUnavailable { command: String },

    #[error("failed launching (command: {command}): writing to stdin: {source}")]
    StdinWrite {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed launching (command: {command}, args: {args:?}): waiting for child: {source}")]
    Wait {
        command: String,
        args: Vec<String>,
        #[source]
        source: std::io::Error,
    },

    #[error("failed launching (command: {command}, args: {args:?}): exit code {code:?}")]
    Exit {
        command: String,
        args: Vec<String>,
        code: Option<i32>,
    },
}

pub type LaunchResult<T> = std::result::Result<T, LaunchError>;
