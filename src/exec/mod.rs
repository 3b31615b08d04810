// src/exec/mod.rs

//! Process launch layer.
//!
//! This module is responsible for actually launching the configured command,
//! using `tokio::process::Command`, delivering the buffered input either by
//! `?`-substitution into the argument list or by writing to the child's
//! stdin.
//!
//! - [`launcher`] owns the spawn/feed/wait policy for one batch.
//! - [`template`] does the placeholder substitution and line joining.
//! - [`backend`] is the seam between the accumulator loop and the real
//!   process launcher, so tests can drive the loop against a fake.

pub mod backend;
pub mod launcher;
pub mod template;

pub use backend::{LaunchBackend, ProcessLauncher};
pub use launcher::launch_batch;

/// Immutable per-run description of what to launch and how.
///
/// Built once from the parsed CLI before the read loop starts. An empty
/// `command` makes every launch a no-op (input is consumed and discarded).
#[derive(Debug, Clone, Default)]
pub struct LaunchSpec {
    /// Path or name of the command to launch. Empty means "do nothing".
    pub command: String,

    /// Argument template; each `?` occurrence is replaced by the joined
    /// buffer when not streaming.
    pub arg_template: Vec<String>,

    /// Deliver the buffer via the child's stdin instead of substitution.
    pub stream: bool,

    /// Start the child and return without waiting for it.
    pub detach: bool,
}
