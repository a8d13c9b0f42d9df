//! Prelude module for common re-exports.
//!
//! ```rust
//! use ib_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::benchmark::config::{
    ActionConfig, BenchmarkConfig, GoldstoneConfig, RewardConfig, SetpointConfig,
};
pub use crate::config::{ConfigError, ConfigLoader};

// ─── State ──────────────────────────────────────────────────────────
pub use crate::benchmark::error::BenchmarkError;
pub use crate::benchmark::state::{Domain, GoldstoneState, SimulationState, SystemResponse};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::{
    COST_BUFFER_LEN, COST_KERNEL, DEFAULT_SETPOINT, PROCESS_MAX, PROCESS_MIN,
};
