// src/exec/backend.rs

//! Pluggable launcher backend abstraction.
//!
//! The accumulator loop talks to a `LaunchBackend` instead of calling
//! [`launch_batch`] directly. This makes it easy to swap in a fake launcher
//! in tests while keeping the production launcher implementation in
//! [`launcher`](super::launcher).
//!
//! - `ProcessLauncher` is the default implementation used by `linerun`. It
//!   carries the immutable [`LaunchSpec`] and spawns a real process per
//!   batch.
//! - Tests can provide their own `LaunchBackend` that, for example, records
//!   which batches were flushed and never touches the OS.

use std::future::Future;
use std::pin::Pin;

use crate::errors::LaunchResult;
use crate::exec::{launch_batch, LaunchSpec};

/// Trait abstracting how a flushed batch of lines is turned into a launch.
///
/// Production code uses [`ProcessLauncher`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait LaunchBackend: Send {
    /// Launch one subprocess for the given batch.
    ///
    /// The implementation is free to:
    /// - spawn an OS process (production)
    /// - record the batch and simulate an outcome (tests)
    fn launch(
        &mut self,
        lines: Vec<Vec<u8>>,
    ) -> Pin<Box<dyn Future<Output = LaunchResult<()>> + Send + '_>>;
}

/// Real launcher backend used in production.
pub struct ProcessLauncher {
    spec: LaunchSpec,
}

impl ProcessLauncher {
    pub fn new(spec: LaunchSpec) -> Self {
        Self { spec }
    }
}

impl LaunchBackend for ProcessLauncher {
    fn launch(
        &mut self,
        lines: Vec<Vec<u8>>,
    ) -> Pin<Box<dyn Future<Output = LaunchResult<()>> + Send + '_>> {
        // Clone the spec so the future doesn't borrow `self` across `await`.
        let spec = self.spec.clone();

        Box::pin(async move { launch_batch(&spec, &lines).await })
    }
}
