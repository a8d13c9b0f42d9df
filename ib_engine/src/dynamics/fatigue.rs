//! Fatigue dynamics with hidden hysteresis channels.
//!
//! Two hidden channels (gain and velocity) integrate noise driven by the
//! effective action. A channel that crosses the amplification threshold
//! grows geometrically until it saturates, and snaps back to the effective
//! value once that drops below tolerance. Fatigue is the base fatigue
//! scaled by the stronger channel.
//!
//! Six random draws are consumed per step in a fixed order:
//! exponential (gain, velocity), uniform (gain, velocity),
//! Bernoulli (gain, velocity). Saturation consumes one extra normal draw.

use ib_common::prelude::*;
use rand::Rng;
use rand_distr::{Distribution, Exp1, StandardNormal};
use tracing::debug;

use super::effective::EffectiveAction;

/// Mean of the exponential noise.
pub const EXP_NOISE_MEAN: f64 = 0.1;
/// Effective value at or below which a hidden channel snaps to it.
pub const ACTION_TOLERANCE: f64 = 0.05;
/// Hidden value at or above which amplification starts.
pub const AMPLIFICATION_START: f64 = 1.2;
/// Geometric growth factor once amplifying.
pub const AMPLIFICATION_RATE: f64 = 1.1;
/// Saturation ceiling of a hidden channel.
pub const AMPLIFICATION_MAX: f64 = 5.0;
/// Decay factor of a non-amplifying hidden channel.
pub const HIDDEN_DECAY: f64 = 0.9;
/// Bernoulli probability bounds.
pub const BERNOULLI_MIN: f64 = 0.001;
pub const BERNOULLI_MAX: f64 = 0.999;
/// Saturated `α = sigmoid(N(2.4, 0.4))`.
const SATURATED_ALPHA_MEAN: f64 = 2.4;
const SATURATED_ALPHA_STD: f64 = 0.4;

// ─── Noise ──────────────────────────────────────────────────────────

/// Raw random draws of one fatigue step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FatigueNoise {
    pub exp_gain: f64,
    pub exp_velocity: f64,
    pub uniform_gain: f64,
    pub uniform_velocity: f64,
    pub burst_gain: bool,
    pub burst_velocity: bool,
}

impl FatigueNoise {
    /// Draw the six per-step samples in stream order.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, effective: &EffectiveAction) -> Self {
        let exp_gain: f64 = Exp1.sample(rng);
        let exp_velocity: f64 = Exp1.sample(rng);
        let uniform_gain = rng.random::<f64>();
        let uniform_velocity = rng.random::<f64>();
        let burst_gain = rng.random_bool(effective.gain.clamp(BERNOULLI_MIN, BERNOULLI_MAX));
        let burst_velocity =
            rng.random_bool(effective.velocity.clamp(BERNOULLI_MIN, BERNOULLI_MAX));

        Self {
            exp_gain: EXP_NOISE_MEAN * exp_gain,
            exp_velocity: EXP_NOISE_MEAN * exp_velocity,
            uniform_gain,
            uniform_velocity,
            burst_gain,
            burst_velocity,
        }
    }
}

#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Channel noise in `[0, 1)`: a squashed exponential plus an occasional
/// uniform burst scaled by the effective value.
#[inline]
pub fn channel_noise(exp_sample: f64, uniform: f64, burst: bool, effective: f64) -> f64 {
    let noise = 2.0 * (sigmoid(exp_sample) - 0.5);
    if burst {
        noise + (1.0 - noise) * uniform * effective
    } else {
        noise
    }
}

/// Advance one hidden channel. Rules are checked in priority order.
#[inline]
pub fn update_hidden(hidden: f64, effective: f64, noise: f64) -> f64 {
    if effective <= ACTION_TOLERANCE {
        effective
    } else if hidden >= AMPLIFICATION_START {
        (AMPLIFICATION_RATE * hidden).min(AMPLIFICATION_MAX)
    } else {
        HIDDEN_DECAY * hidden + noise / 3.0
    }
}

/// Fatigue without the hysteresis amplification.
#[inline]
pub fn base_fatigue(velocity: f64, gain: f64) -> f64 {
    (30_000.0 / (5.0 * velocity + 100.0) - 0.01 * gain * gain).max(0.0)
}

// ─── Update ─────────────────────────────────────────────────────────

/// Advance the fatigue sub-model one step.
///
/// Reads `p`, `v`, `g`, `hg`, `hv`; writes `ge`, `ve`, `hg`, `hv`, `fb`, `f`.
pub fn fatigue_update<R: Rng + ?Sized>(state: &mut SimulationState, rng: &mut R) {
    let effective = EffectiveAction::new(state.v, state.g, state.p);
    state.ge = effective.gain;
    state.ve = effective.velocity;

    let noise = FatigueNoise::sample(rng, &effective);
    let noise_gain = channel_noise(
        noise.exp_gain,
        noise.uniform_gain,
        noise.burst_gain,
        effective.gain,
    );
    let noise_velocity = channel_noise(
        noise.exp_velocity,
        noise.uniform_velocity,
        noise.burst_velocity,
        effective.velocity,
    );

    let was_saturated = state.hg.max(state.hv) == AMPLIFICATION_MAX;
    state.hg = update_hidden(state.hg, effective.gain, noise_gain);
    state.hv = update_hidden(state.hv, effective.velocity, noise_velocity);

    let alpha = if state.hg.max(state.hv) == AMPLIFICATION_MAX {
        if !was_saturated {
            debug!(hg = state.hg, hv = state.hv, "Fatigue hysteresis saturated");
        }
        let z: f64 = StandardNormal.sample(rng);
        sigmoid(SATURATED_ALPHA_MEAN + SATURATED_ALPHA_STD * z)
    } else {
        noise_gain.max(noise_velocity)
    };

    state.fb = base_fatigue(state.v, state.g);
    state.f = state.fb * (1.0 + 2.0 * alpha) / 3.0;
}

// ─── Tests ──────────────────────────────────────────────────────────
