//! Delayed operational cost.
//!
//! The instantaneous operational cost enters a fixed-length delay line and
//! reaches the observed cost only through a bell-shaped kernel weighting
//! the five oldest samples, so the effect of an action surfaces six to ten
//! steps later.

use heapless::HistoryBuf;
use ib_common::prelude::*;

/// Instantaneous operational cost of setpoint, gain and velocity.
#[inline]
pub fn current_operational_cost(setpoint: f64, gain: f64, velocity: f64) -> f64 {
    ((2.0 * setpoint + 2.5 * gain + 4.0 * velocity) / 100.0).exp()
}

/// Delay line of instantaneous operational costs.
#[derive(Debug, Clone)]
pub struct OperationalCostModel {
    history: HistoryBuf<f64, COST_BUFFER_LEN>,
    primed: bool,
}

impl Default for OperationalCostModel {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationalCostModel {
    /// Empty delay line. The first push fills every slot.
    pub fn new() -> Self {
        Self {
            history: HistoryBuf::new(),
            primed: false,
        }
    }

    /// Append a sample, evicting the oldest.
    pub fn push(&mut self, coc: f64) {
        if self.primed {
            self.history.write(coc);
        } else {
            for _ in 0..COST_BUFFER_LEN {
                self.history.write(coc);
            }
            self.primed = true;
        }
    }

    /// Kernel-weighted cost of the delay line.
    pub fn convolve(&self) -> f64 {
        self.history
            .oldest_ordered()
            .zip(COST_KERNEL.iter())
            .map(|(sample, weight)| sample * weight)
            .sum()
    }

    /// Delay line contents, oldest first.
    pub fn snapshot(&self) -> [f64; COST_BUFFER_LEN] {
        let mut out = [0.0; COST_BUFFER_LEN];
        for (slot, sample) in out.iter_mut().zip(self.history.oldest_ordered()) {
            *slot = *sample;
        }
        out
    }

    #[inline]
    pub fn is_primed(&self) -> bool {
        self.primed
    }

    /// Empty the delay line; the next push fills it again.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Advance the operational-cost sub-model one step.
///
/// Reads `p`, `g`, `v`; writes `coc`, `o`, `oc`.
pub fn operational_cost_update(model: &mut OperationalCostModel, state: &mut SimulationState) {
    state.coc = current_operational_cost(state.p, state.g, state.v);
    model.push(state.coc);
    state.o = model.snapshot();
    state.oc = model.convolve();
}

// ─── Tests ──────────────────────────────────────────────────────────
