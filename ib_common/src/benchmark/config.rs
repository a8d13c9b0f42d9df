//! Benchmark configuration structures.
//!
//! All config types use `serde::Deserialize` for TOML loading. Every field
//! has a default, so an empty document yields the standard benchmark.
//! Immutable once an engine has been constructed from it.
//!
//! # TOML Example
//!
//! ```toml
//! log_level = "debug"
//!
//! [goldstone]
//! number_steps = 24
//!
//! [reward]
//! fatigue_weight = 3.0
//! consumption_weight = 1.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::BenchmarkError;
use crate::config::{ConfigError, ConfigLoader, LogLevel};
use crate::consts::{
    DEFAULT_CONSUMPTION_WEIGHT, DEFAULT_FATIGUE_WEIGHT, DEFAULT_GAIN_STEP,
    DEFAULT_HOLD_PROBABILITY, DEFAULT_MAX_CHANGE_RATE, DEFAULT_MAX_SEQUENCE_LENGTH,
    DEFAULT_MISCALIBRATION_WEIGHT, DEFAULT_NUMBER_STEPS, DEFAULT_SETPOINT_DEPENDENCY,
    DEFAULT_SHIFT_BOUND, DEFAULT_VELOCITY_STEP, default_max_required_step,
};

// ─── Top-Level Config ───────────────────────────────────────────────

/// Top-level benchmark configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BenchmarkConfig {
    /// Verbosity the host should install for the engine's tracing events.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Rotating-potential (miscalibration) parameters.
    #[serde(default)]
    pub goldstone: GoldstoneConfig,

    /// Action integration parameters.
    #[serde(default)]
    pub action: ActionConfig,

    /// Cost/reward weights.
    #[serde(default)]
    pub reward: RewardConfig,

    /// Non-stationary setpoint schedule.
    #[serde(default)]
    pub setpoint: SetpointConfig,
}

impl BenchmarkConfig {
    /// Validate parameter bounds.
    ///
    /// # Errors
    ///
    /// Returns `BenchmarkError::InvalidConfiguration` naming the first
    /// offending parameter.
    pub fn validate(&self) -> Result<(), BenchmarkError> {
        self.goldstone.validate()?;
        self.action.validate()?;
        self.reward.validate()?;
        self.setpoint.validate()?;
        Ok(())
    }

    /// Load a TOML file and validate it.
    ///
    /// # Errors
    ///
    /// `FileNotFound` or `ParseError` from loading, `ValidationError` when
    /// a parameter is out of bounds.
    pub fn load_validated(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate().map_err(|e| match e {
            BenchmarkError::InvalidConfiguration(reason) => ConfigError::ValidationError(reason),
            BenchmarkError::Config(inner) => inner,
        })?;
        Ok(config)
    }
}

// ─── Goldstone ──────────────────────────────────────────────────────

/// Parameters of the rotating potential and its state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldstoneConfig {
    /// Angular steps per full turn (positive multiple of 4).
    #[serde(default = "default_number_steps")]
    pub number_steps: u32,

    /// Largest step the optimal policy must take (> 0).
    #[serde(default = "default_max_required_step")]
    pub max_required_step: f64,

    /// Cool-down band around zero. Defaults to `max_required_step / 2`.
    #[serde(default)]
    pub safe_zone: Option<f64>,
}

fn default_number_steps() -> u32 {
    DEFAULT_NUMBER_STEPS
}

impl Default for GoldstoneConfig {
    fn default() -> Self {
        Self {
            number_steps: DEFAULT_NUMBER_STEPS,
            max_required_step: default_max_required_step(),
            safe_zone: None,
        }
    }
}

impl GoldstoneConfig {
    /// Effective safe zone.
    #[inline]
    pub fn safe_zone(&self) -> f64 {
        self.safe_zone.unwrap_or(self.max_required_step / 2.0)
    }

    /// Largest rotation index `k = number_steps / 4`.
    #[inline]
    pub fn strongest_penalty_idx(&self) -> i32 {
        (self.number_steps / 4) as i32
    }

    pub fn validate(&self) -> Result<(), BenchmarkError> {
        if self.number_steps == 0 || self.number_steps % 4 != 0 {
            return Err(BenchmarkError::invalid(format!(
                "number_steps {} must be a positive multiple of 4",
                self.number_steps
            )));
        }
        if !(self.max_required_step > 0.0) || !self.max_required_step.is_finite() {
            return Err(BenchmarkError::invalid(format!(
                "max_required_step {} must be positive",
                self.max_required_step
            )));
        }
        let safe_zone = self.safe_zone();
        if !(safe_zone >= 0.0) || !safe_zone.is_finite() {
            return Err(BenchmarkError::invalid(format!(
                "safe_zone {safe_zone} must be non-negative"
            )));
        }
        Ok(())
    }
}

// ─── Action ─────────────────────────────────────────────────────────

/// Parameters of the action integration and the effective-shift projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    /// Velocity change per unit delta.
    #[serde(default = "default_velocity_step")]
    pub velocity_step: f64,

    /// Gain change per unit delta.
    #[serde(default = "default_gain_step")]
    pub gain_step: f64,

    /// Clip bound of the effective shift.
    #[serde(default = "default_shift_bound")]
    pub shift_bound: f64,

    /// Setpoint coupling of the effective shift.
    #[serde(default = "default_setpoint_dependency")]
    pub setpoint_dependency: f64,
}

fn default_velocity_step() -> f64 {
    DEFAULT_VELOCITY_STEP
}
fn default_gain_step() -> f64 {
    DEFAULT_GAIN_STEP
}
fn default_shift_bound() -> f64 {
    DEFAULT_SHIFT_BOUND
}
fn default_setpoint_dependency() -> f64 {
    DEFAULT_SETPOINT_DEPENDENCY
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            velocity_step: DEFAULT_VELOCITY_STEP,
            gain_step: DEFAULT_GAIN_STEP,
            shift_bound: DEFAULT_SHIFT_BOUND,
            setpoint_dependency: DEFAULT_SETPOINT_DEPENDENCY,
        }
    }
}

impl ActionConfig {
    /// Scale mapping shift `[0,100]` into potential coordinates.
    #[inline]
    pub fn shift_scale(&self) -> f64 {
        2.0 * self.shift_bound + 100.0 * self.setpoint_dependency
    }

    /// Shift change per unit delta, derived so that one full step moves the
    /// effective shift by `max_required_step / 0.9`.
    #[inline]
    pub fn shift_step(&self, max_required_step: f64) -> f64 {
        (max_required_step / 0.9) * 100.0 / self.shift_scale()
    }

    pub fn validate(&self) -> Result<(), BenchmarkError> {
        for (name, value) in [
            ("velocity_step", self.velocity_step),
            ("gain_step", self.gain_step),
            ("shift_bound", self.shift_bound),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(BenchmarkError::invalid(format!(
                    "{name} {value} must be positive"
                )));
            }
        }
        if !(self.setpoint_dependency >= 0.0) || !self.setpoint_dependency.is_finite() {
            return Err(BenchmarkError::invalid(format!(
                "setpoint_dependency {} must be non-negative",
                self.setpoint_dependency
            )));
        }
        Ok(())
    }
}

// ─── Reward ─────────────────────────────────────────────────────────

/// Cost/reward weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Fatigue weight (CRD).
    #[serde(default = "default_fatigue_weight")]
    pub fatigue_weight: f64,

    /// Consumption weight (CRE).
    #[serde(default = "default_consumption_weight")]
    pub consumption_weight: f64,

    /// Miscalibration weight inside the hidden consumption (CRGS).
    #[serde(default = "default_miscalibration_weight")]
    pub miscalibration_weight: f64,
}

fn default_fatigue_weight() -> f64 {
    DEFAULT_FATIGUE_WEIGHT
}
fn default_consumption_weight() -> f64 {
    DEFAULT_CONSUMPTION_WEIGHT
}
fn default_miscalibration_weight() -> f64 {
    DEFAULT_MISCALIBRATION_WEIGHT
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            fatigue_weight: DEFAULT_FATIGUE_WEIGHT,
            consumption_weight: DEFAULT_CONSUMPTION_WEIGHT,
            miscalibration_weight: DEFAULT_MISCALIBRATION_WEIGHT,
        }
    }
}

impl RewardConfig {
    pub fn validate(&self) -> Result<(), BenchmarkError> {
        for (name, value) in [
            ("fatigue_weight", self.fatigue_weight),
            ("consumption_weight", self.consumption_weight),
            ("miscalibration_weight", self.miscalibration_weight),
        ] {
            if !value.is_finite() {
                return Err(BenchmarkError::invalid(format!(
                    "{name} {value} must be finite"
                )));
            }
        }
        Ok(())
    }
}

// ─── Setpoint ───────────────────────────────────────────────────────

/// Parameters of the random-walk setpoint schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetpointConfig {
    /// Segment lengths are drawn uniformly from `1..max_sequence_length`.
    #[serde(default = "default_max_sequence_length")]
    pub max_sequence_length: u32,

    /// Upper bound of the absolute per-step increment.
    #[serde(default = "default_max_change_rate")]
    pub max_change_rate: f64,

    /// Probability that a new segment holds the setpoint.
    #[serde(default = "default_hold_probability")]
    pub hold_probability: f64,
}

fn default_max_sequence_length() -> u32 {
    DEFAULT_MAX_SEQUENCE_LENGTH
}
fn default_max_change_rate() -> f64 {
    DEFAULT_MAX_CHANGE_RATE
}
fn default_hold_probability() -> f64 {
    DEFAULT_HOLD_PROBABILITY
}

impl Default for SetpointConfig {
    fn default() -> Self {
        Self {
            max_sequence_length: DEFAULT_MAX_SEQUENCE_LENGTH,
            max_change_rate: DEFAULT_MAX_CHANGE_RATE,
            hold_probability: DEFAULT_HOLD_PROBABILITY,
        }
    }
}

impl SetpointConfig {
    pub fn validate(&self) -> Result<(), BenchmarkError> {
        if self.max_sequence_length < 2 {
            return Err(BenchmarkError::invalid(format!(
                "max_sequence_length {} must be at least 2",
                self.max_sequence_length
            )));
        }
        if !(self.max_change_rate >= 0.0) || !self.max_change_rate.is_finite() {
            return Err(BenchmarkError::invalid(format!(
                "max_change_rate {} must be non-negative",
                self.max_change_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.hold_probability) {
            return Err(BenchmarkError::invalid(format!(
                "hold_probability {} out of range [0, 1]",
                self.hold_probability
            )));
        }
        Ok(())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
