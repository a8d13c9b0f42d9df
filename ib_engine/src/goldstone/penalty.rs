//! Angle-indexed penalty functions over the NLGP landscape.
//!
//! Each [`PotentialFunction`] is the NLGP restricted to one line through
//! the origin, with the position axis reshaped by a three-segment radius
//! transform so that the optimal effective shift sits at
//! `max(|sin φ|, max_required_step)`.

use std::f64::consts::PI;

use ib_common::prelude::*;
use tracing::debug;

use super::nlgp::Nlgp;

/// Radius where the transform becomes the identity shift `|x| − x1 + r1`.
const TRANSFORM_OUTER_POSITION: f64 = 2.0;
const TRANSFORM_OUTER_RADIUS: f64 = 2.0;

// ─── Radius Transform ───────────────────────────────────────────────

/// Piecewise map from effective shift to NLGP radius.
///
/// Linear up to `x0`, a power curve between `x0` and `x1`, then a unit
/// slope line. Continuous at both joints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusTransform {
    x0: f64,
    r0: f64,
    x1: f64,
    r1: f64,
    inner_scale: f64,
    exponent: f64,
    outer_scale: f64,
}

impl RadiusTransform {
    /// Build the transform mapping `|x0|` onto `|r0|`.
    pub fn new(x0: f64, r0: f64) -> Result<Self, BenchmarkError> {
        let x0 = x0.abs();
        let r0 = r0.abs();
        let x1 = TRANSFORM_OUTER_POSITION;
        let r1 = TRANSFORM_OUTER_RADIUS;

        if !(x0 > 0.0 && r0 > 0.0) {
            return Err(BenchmarkError::invalid(format!(
                "radius transform anchors must be positive (x0={x0}, r0={r0})"
            )));
        }
        if x1 < x0 || r1 <= r0 {
            return Err(BenchmarkError::invalid(format!(
                "radius transform anchors exceed the outer segment (x0={x0}, r0={r0})"
            )));
        }

        let exponent = (x1 - x0) / (r1 - r0);
        Ok(Self {
            x0,
            r0,
            x1,
            r1,
            inner_scale: r0 / x0,
            exponent,
            outer_scale: (r1 - r0) / (x1 - x0).powf(exponent),
        })
    }

    /// Map a signed position onto a signed radius.
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        let ax = x.abs();
        let magnitude = if ax <= self.x0 {
            self.inner_scale * ax
        } else if ax < self.x1 {
            self.r0 + self.outer_scale * (ax - self.x0).powf(self.exponent)
        } else {
            ax - self.x1 + self.r1
        };
        magnitude.copysign(x)
    }
}

// ─── Potential Function ─────────────────────────────────────────────

/// Penalty landscape for a single rotation angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotentialFunction {
    phi: f64,
    nlgp: Nlgp,
    transform: RadiusTransform,
    optimum_radius: f64,
    optimum_value: f64,
}

impl PotentialFunction {
    /// Build the penalty function for angle `phi`.
    pub fn new(phi: f64, max_required_step: f64) -> Result<Self, BenchmarkError> {
        if !(max_required_step > 0.0 && max_required_step.is_finite()) {
            return Err(BenchmarkError::invalid(format!(
                "max_required_step must be positive, got {max_required_step}"
            )));
        }

        let phi = phi.rem_euclid(2.0 * PI);
        let nlgp = Nlgp::new();

        let mut optimum_radius = phi.sin().abs().max(max_required_step);
        if phi >= PI {
            optimum_radius = -optimum_radius;
        }
        let transform =
            RadiusTransform::new(optimum_radius, nlgp.global_minimum_radius(phi))?;

        let mut function = Self {
            phi,
            nlgp,
            transform,
            optimum_radius,
            optimum_value: 0.0,
        };
        function.optimum_value = function.reward(optimum_radius);
        Ok(function)
    }

    /// Potential value at effective shift `position`.
    #[inline]
    pub fn reward(&self, position: f64) -> f64 {
        self.nlgp.polar(self.transform.apply(position), self.phi)
    }

    /// Rotation angle, normalized into `[0, 2π)`.
    #[inline]
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Effective shift at which the penalty is minimal.
    #[inline]
    pub fn optimum_radius(&self) -> f64 {
        self.optimum_radius
    }

    /// Penalty value at [`Self::optimum_radius`].
    #[inline]
    pub fn optimum_value(&self) -> f64 {
        self.optimum_value
    }
}

// ─── Potential Table ────────────────────────────────────────────────

/// Precomputed penalty functions for every rotation index in `[-k, k]`.
#[derive(Debug, Clone)]
pub struct PotentialTable {
    functions: Vec<PotentialFunction>,
    strongest_penalty_idx: i32,
}

impl PotentialTable {
    /// Build `2k + 1` functions at angles `j · 2π / number_steps`.
    pub fn new(number_steps: u32, max_required_step: f64) -> Result<Self, BenchmarkError> {
        if number_steps == 0 || number_steps % 4 != 0 {
            return Err(BenchmarkError::invalid(format!(
                "number_steps must be a positive multiple of 4, got {number_steps}"
            )));
        }
        let k = (number_steps / 4) as i32;
        let angle_step = 2.0 * PI / f64::from(number_steps);

        let functions = (-k..=k)
            .map(|j| PotentialFunction::new(f64::from(j) * angle_step, max_required_step))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            number_steps,
            max_required_step,
            functions = functions.len(),
            "Potential table built"
        );

        Ok(Self {
            functions,
            strongest_penalty_idx: k,
        })
    }

    /// Function for rotation index `phi_idx`.
    ///
    /// Indices outside `[-k, k]` wrap around the table.
    #[inline]
    pub fn get(&self, phi_idx: i32) -> &PotentialFunction {
        let len = self.functions.len() as i32;
        let idx = (self.strongest_penalty_idx + phi_idx).rem_euclid(len);
        &self.functions[idx as usize]
    }

    /// `k = number_steps / 4`.
    #[inline]
    pub fn strongest_penalty_idx(&self) -> i32 {
        self.strongest_penalty_idx
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
