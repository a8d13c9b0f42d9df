//! Miscalibration rotation machine.
//!
//! Discrete state `(domain, system_response, phi_idx)` driven by the
//! effective shift. Leaving the safe zone picks a domain and rotates the
//! potential one angular step per call; re-entering it winds the rotation
//! back toward zero, where the machine resets.
//!
//! Rotation indices beyond `±k` are folded back by reflection about the
//! horizontal axis: `φ → π − φ`.

use ib_common::prelude::*;
use tracing::trace;

use super::penalty::{PotentialFunction, PotentialTable};

#[inline]
fn sign(x: f64) -> i32 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Fold a rotation index back into `[-k, k]`.
///
/// The index is an angle `φ = idx·π/(2k)` taken modulo `2π`; anything past
/// `±π/2` is reflected through `φ → ±π − φ`. Identity inside the range,
/// idempotent everywhere, and `±(k + 1)` maps to `±(k − 1)`.
#[inline]
pub fn fold_phi_idx(phi_idx: i32, k: i32) -> i32 {
    if phi_idx.abs() <= k {
        return phi_idx;
    }
    // representative in (-2k, 2k]
    let mut m = phi_idx.rem_euclid(4 * k);
    if m > 2 * k {
        m -= 4 * k;
    }
    if m > k {
        2 * k - m
    } else if m < -k {
        -2 * k - m
    } else {
        m
    }
}

/// Rotation increment for the next transition.
///
/// Priority: cool-down inside the safe zone, hold at the far boundary of
/// the current domain, otherwise rotate with the response and position
/// signs.
#[inline]
pub fn angular_step(state: &GoldstoneState, position: f64, safe_zone: f64, k: i32) -> i32 {
    if position.abs() <= safe_zone {
        return -state.phi_idx.signum();
    }
    if state.phi_idx == -state.domain.value() * k {
        return 0;
    }
    state.system_response.value() * sign(position)
}

/// Rotation machine with its precomputed penalty table.
#[derive(Debug, Clone)]
pub struct MiscalibrationMachine {
    table: PotentialTable,
    safe_zone: f64,
    state: GoldstoneState,
}

impl MiscalibrationMachine {
    /// Build a machine from a validated configuration.
    pub fn new(config: &GoldstoneConfig) -> Result<Self, BenchmarkError> {
        Self::with_parameters(
            config.number_steps,
            config.max_required_step,
            config.safe_zone(),
        )
    }

    /// Build a machine from raw parameters.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when `number_steps` is not a positive
    /// multiple of 4, `max_required_step <= 0` or `safe_zone < 0`.
    pub fn with_parameters(
        number_steps: u32,
        max_required_step: f64,
        safe_zone: f64,
    ) -> Result<Self, BenchmarkError> {
        if !(safe_zone >= 0.0) {
            return Err(BenchmarkError::invalid(format!(
                "safe_zone must be non-negative, got {safe_zone}"
            )));
        }
        let table = PotentialTable::new(number_steps, max_required_step)?;

        Ok(Self {
            table,
            safe_zone,
            state: GoldstoneState::INITIAL,
        })
    }

    #[inline]
    pub fn state(&self) -> GoldstoneState {
        self.state
    }

    #[inline]
    pub fn domain(&self) -> Domain {
        self.state.domain
    }

    #[inline]
    pub fn system_response(&self) -> SystemResponse {
        self.state.system_response
    }

    #[inline]
    pub fn phi_idx(&self) -> i32 {
        self.state.phi_idx
    }

    #[inline]
    pub fn safe_zone(&self) -> f64 {
        self.safe_zone
    }

    /// `k = number_steps / 4`.
    #[inline]
    pub fn strongest_penalty_idx(&self) -> i32 {
        self.table.strongest_penalty_idx()
    }

    /// Back to `(positive, advantageous, 0)`.
    pub fn reset(&mut self) {
        self.state = GoldstoneState::INITIAL;
    }

    /// Overwrite the discrete state. `phi_idx` is folded into range.
    pub fn restore(&mut self, state: GoldstoneState) {
        self.state = GoldstoneState {
            phi_idx: fold_phi_idx(state.phi_idx, self.strongest_penalty_idx()),
            ..state
        };
    }

    /// Penalty function selected by the current rotation index.
    #[inline]
    pub fn penalty_function(&self) -> &PotentialFunction {
        self.table.get(self.state.phi_idx)
    }

    /// Advance the machine for effective shift `position`.
    pub fn transition(&mut self, position: f64) {
        let k = self.strongest_penalty_idx();
        let in_safe_zone = position.abs() <= self.safe_zone;
        let mut next = self.state;

        if !in_safe_zone {
            next.domain = Domain::from_position(position);
            if next.domain != self.state.domain {
                next.system_response = SystemResponse::Advantageous;
            }
        }

        next.phi_idx += angular_step(&next, position, self.safe_zone, k);
        if next.phi_idx.abs() >= k {
            next.system_response = SystemResponse::Disadvantageous;
        }
        next.phi_idx = fold_phi_idx(next.phi_idx, k);

        if next.phi_idx == 0 && in_safe_zone {
            trace!("Miscalibration machine back at rest");
            next = GoldstoneState::INITIAL;
        }

        self.state = next;
    }

    /// Penalty at `position` under the current rotation.
    #[inline]
    pub fn reward(&self, position: f64) -> f64 {
        self.penalty_function().reward(position)
    }

    /// Effective shift minimizing the current penalty.
    #[inline]
    pub fn optimal_position(&self) -> f64 {
        self.penalty_function().optimum_radius()
    }

    /// Penalty at [`Self::optimal_position`].
    #[inline]
    pub fn optimal_reward(&self) -> f64 {
        self.penalty_function().optimum_value()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
