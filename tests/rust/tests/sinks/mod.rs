//! Sink integration tests
//!
//! Severity floors, rotating files and syslog delivery.

mod rotation;
mod syslog;
