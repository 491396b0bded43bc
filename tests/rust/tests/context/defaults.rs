//! Default fields present on every record

use logkit::{clear_log_context, get_log_context, set_log_context, ContextValue};
use tests::capture::CapturedLogger;
use tests::fields;

#[test]
fn test_defaults_present_without_any_context() {
    clear_log_context();
    let ctx = get_log_context();

    assert!(ctx.contains_key("hostname"));
    assert!(ctx.contains_key("env"));
    assert_eq!(
        ctx.get("pid"),
        Some(&ContextValue::Int(i64::from(std::process::id())))
    );
    assert_eq!(ctx.get("user_id"), Some(&ContextValue::from("-")));
    assert_eq!(ctx.get("session_id"), Some(&ContextValue::from("-")));
    assert_eq!(ctx.get("request_id"), Some(&ContextValue::from("-")));
}

#[test]
fn test_defaults_rendered_next_to_explicit_fields() {
    let captured = CapturedLogger::human("defaults");
    set_log_context(fields([("user_id", "alice")]));
    captured.log.info("hello");
    clear_log_context();

    let line = &captured.lines()[0];
    assert!(line.contains("[user_id=alice]"), "{}", line);
    assert!(line.contains("[hostname="), "{}", line);
    assert!(line.contains("[env="), "{}", line);
    assert!(line.contains(&format!("[pid={}]", std::process::id())), "{}", line);
}

#[test]
fn test_set_replaces_previous_context() {
    set_log_context(fields([("user_id", "alice"), ("tenant", "acme")]));
    set_log_context(fields([("session_id", "s-1")]));
    let ctx = get_log_context();
    clear_log_context();

    assert_eq!(ctx["session_id"], ContextValue::from("s-1"));
    assert_eq!(ctx["user_id"], ContextValue::from("-"));
    assert!(!ctx.contains_key("tenant"));
}
