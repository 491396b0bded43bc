//! Helper integration tests
//!
//! Duration logging, progress tracking, the `tracing` bridge and macros.

mod bridge;
mod macros;
