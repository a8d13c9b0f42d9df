//! Consumption and total cost.

use ib_common::prelude::*;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

/// Relative scale of the consumption observation noise.
pub const CONSUMPTION_NOISE_SCALE: f64 = 0.005;

/// Weighted components of the current cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    /// Fatigue `f`.
    pub fatigue: f64,
    /// Consumption `c`.
    pub consumption: f64,
    /// `fatigue_weight · f`.
    pub fatigue_weighted: f64,
    /// `consumption_weight · c`.
    pub consumption_weighted: f64,
    /// Total cost; the reward is its negation.
    pub total: f64,
}

/// Consumption before observation noise: delayed operating cost plus the
/// weighted miscalibration penalty `1 − MC`.
#[inline]
pub fn hidden_consumption(oc: f64, mc: f64, weights: &RewardConfig) -> f64 {
    oc - weights.miscalibration_weight * (mc - 1.0)
}

/// Observed consumption for a standard-normal sample `z`.
#[inline]
pub fn noisy_consumption(hidden: f64, z: f64) -> f64 {
    hidden - z * (1.0 + CONSUMPTION_NOISE_SCALE * hidden)
}

/// Draw one noise sample and write `c`.
pub fn consumption_update<R: Rng + ?Sized>(
    state: &mut SimulationState,
    weights: &RewardConfig,
    rng: &mut R,
) {
    let hidden = hidden_consumption(state.oc, state.mc, weights);
    let z: f64 = StandardNormal.sample(rng);
    state.c = noisy_consumption(hidden, z);
}

/// Write `cost` and `reward` from `f` and `c`.
pub fn cost_update(state: &mut SimulationState, weights: &RewardConfig) {
    state.cost = weights.fatigue_weight * state.f + weights.consumption_weight * state.c;
    state.reward = -state.cost;
}

/// Decompose the current cost into its weighted terms.
pub fn reward_breakdown(state: &SimulationState, weights: &RewardConfig) -> RewardBreakdown {
    let fatigue_weighted = weights.fatigue_weight * state.f;
    let consumption_weighted = weights.consumption_weight * state.c;
    RewardBreakdown {
        fatigue: state.f,
        consumption: state.c,
        fatigue_weighted,
        consumption_weighted,
        total: fatigue_weighted + consumption_weighted,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
