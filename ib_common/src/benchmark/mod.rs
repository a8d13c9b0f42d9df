//! Benchmark shared types.
//!
//! Types shared between the simulation engine and its hosts: the
//! configuration record, the simulation state with its tagged enums, and
//! the construction-time error taxonomy.

pub mod config;
pub mod error;
pub mod state;
