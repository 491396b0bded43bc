//! Context store integration tests
//!
//! Thread isolation, defaults and persistence of `with_context` fields.

mod defaults;
mod isolation;
