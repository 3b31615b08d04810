// src/engine/accumulator.rs

use std::time::{Duration, Instant};

use tracing::debug;

/// Ordered line buffer plus the throttle window that decides when to flush.
///
/// Semantics:
/// - A zero interval disables throttling: every pushed line flushes
///   immediately, so the buffer never holds more than the line just pushed.
/// - A non-zero interval batches lines: a push flushes only when the time
///   elapsed since the last flush STRICTLY exceeds the interval. The
///   last-flush timestamp moves to the triggering push's time exactly when
///   that happens.
/// - The throttle is evaluated only when a line arrives, never on a
///   wall-clock timer. A quiet input stream leaves lines buffered until the
///   next line shows up (or until [`drain_remaining`](Self::drain_remaining)
///   at end of input). This gives an at-least-interval batching guarantee,
///   not an exact-interval one.
///
/// Time is passed in by the caller rather than read here, which keeps the
/// throttle logic testable without real sleeps.
#[derive(Debug)]
pub struct Accumulator {
    interval: Duration,
    last_flush: Instant,
    lines: Vec<Vec<u8>>,
}

impl Accumulator {
    /// Create an empty accumulator.
    ///
    /// `start` seeds the last-flush timestamp, so with throttling enabled the
    /// first flush happens only once `interval` has elapsed from here.
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last_flush: start,
            lines: Vec::new(),
        }
    }

    /// Append one line (terminator already stripped) and decide whether to
    /// flush.
    ///
    /// Returns the whole buffered batch, in arrival order, when the throttle
    /// policy says so; the buffer is left empty in that case.
    pub fn push(&mut self, line: Vec<u8>, now: Instant) -> Option<Vec<Vec<u8>>> {
        self.lines.push(line);

        if self.interval.is_zero() {
            return Some(self.take());
        }

        if now.duration_since(self.last_flush) > self.interval {
            self.last_flush = now;
            debug!(batch = self.lines.len(), "throttle window elapsed");
            return Some(self.take());
        }

        None
    }

    /// Drain whatever is still buffered at end of input.
    ///
    /// Returns `None` when the buffer is empty (always the case with
    /// throttling disabled, since every push flushed immediately).
    pub fn drain_remaining(&mut self) -> Option<Vec<Vec<u8>>> {
        if self.lines.is_empty() {
            None
        } else {
            Some(self.take())
        }
    }

    /// Number of lines currently buffered.
    pub fn buffered(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn take(&mut self) -> Vec<Vec<u8>> {
        std::mem::take(&mut self.lines)
    }
}
