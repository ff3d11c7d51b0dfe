//! shellkit core - session values, invocations and ports
//!
//! This crate holds the domain types and the ports (interfaces) every shellkit
//! command is written against. It never spawns processes, touches the
//! filesystem or reads the terminal; the binary crate provides adapters for
//! that, and tests provide canned ones.

pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
