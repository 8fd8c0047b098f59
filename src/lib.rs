//! Bulwark turn strategy engine library.
//!
//! Exposes the arena model, the runtime protocol, the strategy and the
//! engine that ties them together, for use by integration tests and the
//! binary entry point.

pub mod arena;
pub mod engine;
pub mod logging;
pub mod protocol;
pub mod strategy;
