//! shellkit application library
//!
//! Adapters for the core ports, one module per subcommand, configuration and
//! shell integration. Exposed as a library for the integration tests.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod shell;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
