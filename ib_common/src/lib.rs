//! Industrial Benchmark Common Library
//!
//! This crate provides the shared constants, configuration loading utilities,
//! state record and error types used by every crate of the industrial
//! benchmark workspace.
//!
//! # Module Structure
//!
//! - [`benchmark`] - Benchmark configuration, simulation state and errors
//! - [`config`] - Configuration loading traits and types
//! - [`consts`] - Standard benchmark parameters
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use ib_common::prelude::*;
//!
//! let config = BenchmarkConfig::default();
//! assert!(config.validate().is_ok());
//! ```

pub mod benchmark;
pub mod config;
pub mod consts;
pub mod prelude;
