//! Standard benchmark parameters.
//!
//! Single source of truth for the numeric constants of the standard
//! industrial benchmark configuration. Imported by all crates.

use static_assertions::const_assert;

/// Lower bound of every process variable (setpoint, velocity, gain, shift).
pub const PROCESS_MIN: f64 = 0.0;

/// Upper bound of every process variable (setpoint, velocity, gain, shift).
pub const PROCESS_MAX: f64 = 100.0;

/// Initial velocity, gain and shift of a freshly constructed engine.
pub const INITIAL_CONTROL_VALUE: f64 = 50.0;

/// Default setpoint when none is given.
pub const DEFAULT_SETPOINT: f64 = 50.0;

// ─── Goldstone ──────────────────────────────────────────────────────

/// Angular resolution of the rotating potential (full turn).
pub const DEFAULT_NUMBER_STEPS: u32 = 24;

/// Angle [deg] whose sine is the largest step the optimal policy must take.
pub const MAX_REQUIRED_STEP_DEG: f64 = 15.0;

/// Bound of the effective shift in potential coordinates.
pub const DEFAULT_SHIFT_BOUND: f64 = 1.5;

/// Setpoint coupling of the effective shift.
pub const DEFAULT_SETPOINT_DEPENDENCY: f64 = 0.02;

const_assert!(DEFAULT_NUMBER_STEPS > 0 && DEFAULT_NUMBER_STEPS % 4 == 0);

/// `sin(15°)`, computed the same way as the reference parameter set.
pub fn default_max_required_step() -> f64 {
    (MAX_REQUIRED_STEP_DEG / 180.0 * core::f64::consts::PI).sin()
}

// ─── Action ─────────────────────────────────────────────────────────

/// Velocity change per unit delta.
pub const DEFAULT_VELOCITY_STEP: f64 = 1.0;

/// Gain change per unit delta.
pub const DEFAULT_GAIN_STEP: f64 = 10.0;

// ─── Operational Cost ───────────────────────────────────────────────

/// Number of slots in the operational-cost delay line.
pub const COST_BUFFER_LEN: usize = 10;

/// Number of non-zero kernel taps (all on the oldest slots).
pub const COST_KERNEL_TAPS: usize = 5;

/// Convolution kernel over the cost delay line, oldest slot first.
pub const COST_KERNEL: [f64; COST_BUFFER_LEN] = [
    0.11111, 0.22222, 0.33333, 0.22222, 0.11111, 0.0, 0.0, 0.0, 0.0, 0.0,
];

const_assert!(COST_KERNEL_TAPS <= COST_BUFFER_LEN);

// ─── Reward ─────────────────────────────────────────────────────────

/// Weight of fatigue in the total cost (CRD).
pub const DEFAULT_FATIGUE_WEIGHT: f64 = 3.0;

/// Weight of consumption in the total cost (CRE).
pub const DEFAULT_CONSUMPTION_WEIGHT: f64 = 1.0;

/// Weight of the miscalibration term in the hidden consumption (CRGS).
pub const DEFAULT_MISCALIBRATION_WEIGHT: f64 = 25.0;

// ─── Setpoint Schedule ──────────────────────────────────────────────

/// Exclusive upper bound of a setpoint segment length.
pub const DEFAULT_MAX_SEQUENCE_LENGTH: u32 = 100;

/// Maximum absolute setpoint increment per step.
pub const DEFAULT_MAX_CHANGE_RATE: f64 = 1.0;

/// Probability that a freshly drawn segment holds the setpoint.
pub const DEFAULT_HOLD_PROBABILITY: f64 = 0.1;
