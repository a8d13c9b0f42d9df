//! Action integration.
//!
//! An action is a delta triple in `[-1, 1]³` applied to velocity, gain and
//! shift. The shift is then mapped into the potential's coordinates as the
//! effective shift, which depends on the setpoint.

use ib_common::prelude::*;

/// Per-unit step sizes and the shift mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionScales {
    /// Velocity change per unit delta.
    pub velocity_step: f64,
    /// Gain change per unit delta.
    pub gain_step: f64,
    /// Shift change per unit delta.
    pub shift_step: f64,
    /// Bound of the effective shift.
    pub shift_bound: f64,
    /// Setpoint coupling of the effective shift.
    pub setpoint_dependency: f64,
    /// Scale from shift to effective shift.
    pub shift_scale: f64,
}

impl ActionScales {
    pub fn from_config(action: &ActionConfig, goldstone: &GoldstoneConfig) -> Self {
        Self {
            velocity_step: action.velocity_step,
            gain_step: action.gain_step,
            shift_step: action.shift_step(goldstone.max_required_step),
            shift_bound: action.shift_bound,
            setpoint_dependency: action.setpoint_dependency,
            shift_scale: action.shift_scale(),
        }
    }
}

/// Clip every component of a delta into `[-1, 1]`.
#[inline]
pub fn clip_delta(delta: [f64; 3]) -> [f64; 3] {
    delta.map(|d| d.clamp(-1.0, 1.0))
}

/// Effective shift of `shift` at `setpoint`, clipped to `±shift_bound`.
#[inline]
pub fn effective_shift(shift: f64, setpoint: f64, scales: &ActionScales) -> f64 {
    (scales.shift_scale * shift / 100.0
        - scales.setpoint_dependency * setpoint
        - scales.shift_bound)
        .clamp(-scales.shift_bound, scales.shift_bound)
}

/// Apply a delta to `v`, `g`, `h` and recompute `he`.
///
/// Out-of-range deltas are clipped, never rejected.
pub fn apply_action(state: &mut SimulationState, delta: [f64; 3], scales: &ActionScales) {
    let [dv, dg, dh] = clip_delta(delta);
    state.v = (state.v + dv * scales.velocity_step).clamp(PROCESS_MIN, PROCESS_MAX);
    state.g = (state.g + dg * scales.gain_step).clamp(PROCESS_MIN, PROCESS_MAX);
    state.h = (state.h + dh * scales.shift_step).clamp(PROCESS_MIN, PROCESS_MAX);
    state.he = effective_shift(state.h, state.p, scales);
}

// ─── Tests ──────────────────────────────────────────────────────────
