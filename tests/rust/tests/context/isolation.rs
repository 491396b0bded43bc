//! Per-thread context isolation

use logkit::{clear_log_context, set_log_context};
use std::sync::{Arc, Barrier};
use std::thread;
use tests::capture::CapturedLogger;
use tests::fields;

#[test]
fn test_other_thread_does_not_see_context() {
    let captured = CapturedLogger::human("isolation");
    let barrier = Arc::new(Barrier::new(2));

    let thread_a = {
        let log = captured.log.clone();
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            set_log_context(fields([("user_id", "bob")]));
            barrier.wait();
            log.info("hi");
        })
    };
    let thread_b = {
        let log = captured.log.clone();
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            log.info("hey");
        })
    };
    thread_a.join().unwrap();
    thread_b.join().unwrap();

    let lines = captured.lines();
    assert_eq!(lines.len(), 2);
    let hi = lines.iter().find(|l| l.ends_with(" - hi")).unwrap();
    let hey = lines.iter().find(|l| l.ends_with(" - hey")).unwrap();
    assert!(hi.contains("[user_id=bob]"), "{}", hi);
    assert!(!hey.contains("user_id=bob"), "{}", hey);
}

#[test]
fn test_with_context_fields_stay_on_their_thread() {
    let captured = CapturedLogger::compact("isolation-chain");
    clear_log_context();

    captured
        .log
        .with_context(fields([("request_id", "req-1")]))
        .info("first");

    let seen = {
        let log = captured.log.clone();
        thread::spawn(move || {
            log.info("elsewhere");
            logkit::get_log_context_value("request_id")
        })
        .join()
        .unwrap()
    };

    assert_eq!(seen, Some(logkit::ContextValue::from("-")));
    assert_eq!(
        logkit::get_log_context_value("request_id"),
        Some(logkit::ContextValue::from("req-1"))
    );
    clear_log_context();
}

#[test]
fn test_with_context_persists_until_cleared() {
    let captured = CapturedLogger::human("persist");
    clear_log_context();

    captured
        .log
        .with_context(fields([("session_id", "s-9")]))
        .info("one");
    captured.log.warning("two");
    clear_log_context();
    captured.log.error("three");

    let lines = captured.lines();
    assert!(lines[0].contains("[session_id=s-9]"));
    assert!(lines[1].contains("[session_id=s-9]"));
    assert!(!lines[2].contains("session_id"));
}

#[test]
fn test_scoped_context_is_restored() {
    clear_log_context();
    set_log_context(fields([("user_id", "outer")]));
    let inner = logkit::scoped(fields([("user_id", "inner")]), || {
        logkit::get_log_context_value("user_id")
    });
    assert_eq!(inner, Some(logkit::ContextValue::from("inner")));
    assert_eq!(
        logkit::get_log_context_value("user_id"),
        Some(logkit::ContextValue::from("outer"))
    );
    clear_log_context();
}
