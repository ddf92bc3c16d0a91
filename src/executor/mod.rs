//! Utility execution module
//!
//! This module handles running a selected utility through the external
//! toolchain: a quiet build step followed by a live run step.

mod runner;

pub use runner::{
    expand_args, find_executable, run_utility, BuildRunHarness, DotnetHarness, RunOutcome,
    RunPhase, NO_EXIT_CODE, SPAWN_FAILURE_EXIT_CODE,
};

#[cfg(test)]
#[path = "../executor_tests.rs"]
mod tests;
