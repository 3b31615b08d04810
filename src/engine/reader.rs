// src/engine/reader.rs

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info};

use crate::engine::accumulator::Accumulator;
use crate::exec::LaunchBackend;

/// Counters reported by [`run_loop`] once the input stream ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub lines_read: u64,
    pub flushes: u64,
    pub failed_launches: u64,
}

/// The main read/flush loop.
///
/// Reads lines from `reader` until end of input, accumulating them under the
/// throttle `interval` and handing every flushed batch to `backend`. A failed
/// launch is logged and contained to that one attempt: the buffer was already
/// cleared by the flush, the loop keeps reading, and the error never
/// propagates out of here.
///
/// Only an input read error is fatal; end of input is the normal way out,
/// after a final flush of whatever is still buffered.
pub async fn run_loop<R, B>(mut reader: R, interval: Duration, backend: &mut B) -> Result<LoopStats>
where
    R: AsyncBufRead + Unpin,
    B: LaunchBackend,
{
    info!(throttle_ms = interval.as_millis() as u64, "read loop started");

    let mut acc = Accumulator::new(interval, Instant::now());
    let mut stats = LoopStats::default();
    let mut raw = Vec::new();

    loop {
        raw.clear();
        let n = reader
            .read_until(b'\n', &mut raw)
            .await
            .context("reading input line")?;
        if n == 0 {
            break;
        }

        stats.lines_read += 1;
        let line = strip_terminator(&raw);

        if let Some(batch) = acc.push(line, Instant::now()) {
            flush(backend, batch, &mut stats).await;
        }
    }

    if let Some(batch) = acc.drain_remaining() {
        debug!(batch = batch.len(), "final flush at end of input");
        flush(backend, batch, &mut stats).await;
    }

    info!("read loop finished (end of input)");

    Ok(stats)
}

/// Hand one batch to the backend, counting and logging the outcome.
async fn flush<B: LaunchBackend>(backend: &mut B, batch: Vec<Vec<u8>>, stats: &mut LoopStats) {
    stats.flushes += 1;
    if let Err(err) = backend.launch(batch).await {
        stats.failed_launches += 1;
        error!(error = %err, "error while launching");
    }
}

/// Drop the trailing `\n` (and a preceding `\r`, if any) from a raw read.
fn strip_terminator(raw: &[u8]) -> Vec<u8> {
    let mut end = raw.len();
    if end > 0 && raw[end - 1] == b'\n' {
        end -= 1;
        if end > 0 && raw[end - 1] == b'\r' {
            end -= 1;
        }
    }
    raw[..end].to_vec()
}
