//! CLI command implementations for sortviz.
//!
//! - [`run`] - Run one algorithm while polling its frames
//! - [`compare`] - Compare operation counts across algorithms

// Blanket clippy pedantic allows for command implementations.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::uninlined_format_args
)]

pub mod command;
pub mod common;
pub mod compare;
pub mod run;
