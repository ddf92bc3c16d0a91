//! UtilHub - a terminal launcher for file-based .NET utilities
//!
//! Discovers `*.csx` files, reads their `// @` header directives, and lets
//! the user pick one from a two-pane list to build and run it.

pub mod actions;
pub mod app;
pub mod config;
pub mod error;
pub mod executor;
pub mod icons;
pub mod logging;
pub mod navigation;
pub mod platform;
pub mod strings;
pub mod tui;
pub mod utilities;
