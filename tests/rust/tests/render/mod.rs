//! Renderer integration tests
//!
//! Human, compact and JSON output for the same enriched records.

mod compact;
