//! Setup integration tests
//!
//! Sink wiring from `LogConfig`, re-running setup and setup failures.

mod config;
