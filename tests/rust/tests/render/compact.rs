//! Compact renderer

use logkit::{clear_log_context, set_log_context, CompactRenderer, Render, Severity};
use pretty_assertions::assert_eq;
use tests::{fields, fixtures};

#[test]
fn test_level_and_message_only() {
    set_log_context(fields([("user_id", "bob")]));
    let record = fixtures::enriched(Severity::ERROR, "payment declined");
    clear_log_context();

    assert_eq!(CompactRenderer.render(&record), "[ERROR] payment declined");
}

#[test]
fn test_exception_is_appended() {
    let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream");
    let record = logkit::enrich(
        fixtures::record(Severity::CRITICAL, "gave up")
            .with_exception(logkit::ExceptionInfo::without_backtrace(&err)),
    );
    assert_eq!(
        CompactRenderer.render(&record),
        "[CRITICAL] gave up\nError: upstream"
    );
}
