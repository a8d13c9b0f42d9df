//! Setpoint-dependent effective action.
//!
//! Maps velocity, gain and setpoint onto two normalized quantities in
//! `[0, 1]`: the effective velocity and the effective gain. Both are
//! min-max scaled against the extreme corners of the control box so the
//! range holds for every setpoint.

/// Normalized effective velocity and gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveAction {
    /// Effective velocity, `[0, 1]`.
    pub velocity: f64,
    /// Effective gain, `[0, 1]`.
    pub gain: f64,
}

#[inline]
fn effective_a(velocity: f64, setpoint: f64) -> f64 {
    velocity + 101.0 - setpoint
}

#[inline]
fn effective_b(gain: f64, setpoint: f64) -> f64 {
    gain + 1.0 + setpoint
}

#[inline]
fn unscaled_velocity(velocity: f64, gain: f64, setpoint: f64) -> f64 {
    (effective_b(gain, setpoint) + 1.0) / effective_a(velocity, setpoint)
}

#[inline]
fn unscaled_gain(gain: f64, setpoint: f64) -> f64 {
    1.0 / effective_b(gain, setpoint)
}

impl EffectiveAction {
    /// Compute the effective action for control values in `[0, 100]`.
    pub fn new(velocity: f64, gain: f64, setpoint: f64) -> Self {
        let v_min = unscaled_velocity(100.0, 0.0, setpoint);
        let v_max = unscaled_velocity(0.0, 100.0, setpoint);
        let g_min = unscaled_gain(100.0, setpoint);
        let g_max = unscaled_gain(0.0, setpoint);

        Self {
            velocity: (unscaled_velocity(velocity, gain, setpoint) - v_min) / (v_max - v_min),
            gain: (unscaled_gain(gain, setpoint) - g_min) / (g_max - g_min),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
