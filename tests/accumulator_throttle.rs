use std::error::Error;
use std::time::{Duration, Instant};

use linerun::engine::Accumulator;

type TestResult = Result<(), Box<dyn Error>>;

fn line(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

#[test]
fn zero_interval_flushes_every_line() -> TestResult {
    let start = Instant::now();
    let mut acc = Accumulator::new(Duration::ZERO, start);

    let first = acc.push(line("a"), start);
    assert_eq!(first, Some(vec![line("a")]));
    assert!(acc.is_empty());

    let second = acc.push(line("b"), start + Duration::from_millis(1));
    assert_eq!(second, Some(vec![line("b")]));
    assert!(acc.is_empty());

    // Nothing left over for a final flush.
    assert_eq!(acc.drain_remaining(), None);

    Ok(())
}

#[test]
fn nonzero_interval_buffers_until_elapsed_strictly_exceeds() -> TestResult {
    let interval = Duration::from_millis(100);
    let start = Instant::now();
    let mut acc = Accumulator::new(interval, start);

    assert_eq!(acc.push(line("a"), start), None);
    assert_eq!(acc.buffered(), 1);

    // Exactly at the interval boundary: strictly-greater check, no flush.
    assert_eq!(acc.push(line("b"), start + interval), None);
    assert_eq!(acc.buffered(), 2);

    // One tick past the boundary: flush everything, in arrival order.
    let batch = acc.push(line("c"), start + interval + Duration::from_millis(1));
    assert_eq!(batch, Some(vec![line("a"), line("b"), line("c")]));
    assert!(acc.is_empty());

    Ok(())
}

#[test]
fn flush_resets_the_throttle_window() -> TestResult {
    let interval = Duration::from_millis(100);
    let start = Instant::now();
    let mut acc = Accumulator::new(interval, start);

    let t_flush = start + Duration::from_millis(150);
    assert!(acc.push(line("a"), t_flush).is_some());

    // The window restarts at the flush time, not at program start.
    assert_eq!(acc.push(line("b"), t_flush + interval), None);

    let batch = acc.push(line("c"), t_flush + interval + Duration::from_millis(1));
    assert_eq!(batch, Some(vec![line("b"), line("c")]));

    Ok(())
}

#[test]
fn drain_remaining_returns_the_tail_batch_once() -> TestResult {
    let interval = Duration::from_millis(100);
    let start = Instant::now();
    let mut acc = Accumulator::new(interval, start);

    acc.push(line("a"), start);
    acc.push(line("b"), start + Duration::from_millis(5));

    assert_eq!(acc.drain_remaining(), Some(vec![line("a"), line("b")]));
    assert_eq!(acc.drain_remaining(), None);

    Ok(())
}
