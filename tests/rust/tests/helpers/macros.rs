//! Logging macros capture the enclosing function

use logkit::Severity;
use tests::capture::CapturedLogger;

fn reconcile_accounts(captured: &CapturedLogger) {
    logkit::info!(captured.log, "reconciled {} accounts", 3);
    logkit::critical!(captured.log, "ledger mismatch");
}

#[test]
fn test_macros_record_function_name() {
    let captured = CapturedLogger::human("macros");
    reconcile_accounts(&captured);

    let lines = captured.lines();
    assert!(lines[0].contains(" reconcile_accounts()] "), "{}", lines[0]);
    assert!(lines[0].ends_with(" - reconciled 3 accounts"), "{}", lines[0]);
    assert!(lines[1].contains("[CRITICAL 💥]"), "{}", lines[1]);
}

#[test]
fn test_handle_methods_omit_function_macros_add_it() {
    let captured = CapturedLogger::human("macros-vs-handle");
    captured.log.info("from the handle");
    logkit::info!(captured.log, "from the macro");

    let lines = captured.lines();
    assert!(lines[0].contains("[macros.rs:"), "{}", lines[0]);
    assert!(!lines[0].contains("()]"), "{}", lines[0]);
    assert!(
        lines[1].contains(" test_handle_methods_omit_function_macros_add_it()] "),
        "{}",
        lines[1]
    );
}

#[test]
fn test_log_macro_with_custom_severity() {
    let captured = CapturedLogger::compact("macros-custom");
    logkit::log!(captured.log, Severity::custom("network", 22), "link up");
    assert_eq!(captured.lines(), vec!["[NETWORK] link up"]);
}
