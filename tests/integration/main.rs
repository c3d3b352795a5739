//! Integration tests for sortviz.
//!
//! These tests drive the engine and the CLI end to end, the way a render loop
//! or a shell user would.

mod helpers;
mod test_algorithms;
mod test_compare_command;
mod test_engine_scenarios;
mod test_run_command;
