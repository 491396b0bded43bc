//! `tracing` events routed into logkit sinks

use logkit::ContextLayer;
use tests::capture::CapturedLogger;
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn test_tracing_events_reach_logkit_sinks() {
    let captured = CapturedLogger::human("bridge");
    let subscriber = tracing_subscriber::registry().with(ContextLayer::new(&captured.log));

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(request_id = "req-42", "request started");
        tracing::error!(status = 503u16, "upstream unavailable");
    });

    let lines = captured.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[INFO ℹ️] [bridge]"), "{}", lines[0]);
    assert!(lines[0].contains("[request_id=req-42]"), "{}", lines[0]);
    assert!(lines[0].ends_with(" - request started"), "{}", lines[0]);
    assert!(lines[1].contains("[status=503]"), "{}", lines[1]);
    assert!(lines[1].contains("[bridge.rs:"), "{}", lines[1]);
}
