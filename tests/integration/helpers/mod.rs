//! Helper utilities for integration tests.

pub mod polling;

pub use polling::*;
