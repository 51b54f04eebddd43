//! Stack capture with backtraces enabled
//!
//! Runs as its own test binary so it can install a process-wide config.

use cause_chain::config::{self, ChainConfig};
use cause_chain::{chainable_error, full_stack, ChainableError, ErrorVariant};

chainable_error! {
    struct CaptureError => "failed to capture";
}

fn enable() {
    // Every test in this binary wants the same config; only the first install wins.
    let _ = config::install(ChainConfig::new().with_backtrace(true).with_max_frames(32));
}

#[inline(never)]
fn do_capture() -> ChainableError {
    CaptureError::plain()
}

#[inline(never)]
fn do_capture_base() -> ChainableError {
    ChainableError::new("base capture")
}

#[test]
fn test_config_is_enabled() {
    enable();
    assert!(config::current().backtrace);
    assert_eq!(config::current().max_frames, 32);
}

#[test]
fn test_first_frame_is_constructing_function() {
    enable();
    let err = do_capture();
    let frames = err.stack().frames();
    assert!(!frames.is_empty());
    assert!(
        frames[0].function().contains("do_capture"),
        "unexpected first frame: {}",
        frames[0]
    );
    assert!(frames.len() <= 32);
}

#[test]
fn test_base_constructor_anchors_at_caller() {
    enable();
    let err = do_capture_base();
    let frames = err.stack().frames();
    assert!(frames[0].function().contains("do_capture_base"));
}

#[test]
fn test_no_internal_frames_lead_the_trace() {
    enable();
    let err = do_capture();
    let first = err.stack().frames()[0].function();
    assert!(!first.starts_with("backtrace::"));
    assert!(!first.contains("cause_chain::"));
}

#[test]
fn test_full_stack_lists_frames_then_causes() {
    enable();
    let err = do_capture().with_cause(std::io::Error::other("device busy"));
    let stack = full_stack(&err);
    let lines: Vec<&str> = stack.lines().collect();

    assert_eq!(lines[0], "CaptureError: failed to capture: device busy");
    assert!(lines[1].starts_with("    at ") && lines[1].contains("do_capture"));
    assert_eq!(lines.last().copied(), Some("caused by: device busy"));
    assert_eq!(lines.len(), 1 + err.stack().frames().len() + 1);
}
