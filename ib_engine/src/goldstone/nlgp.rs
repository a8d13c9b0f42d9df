//! Normalized linear-biased Goldstone potential (NLGP).
//!
//! A rotationally symmetric double well `-α r² + β r⁴` tilted by a linear
//! term `κ r sin φ`. The three coefficients are normalized so the global
//! minimum of the landscape has value −1 and the tilt is strong enough to
//! make the minimum radius depend on the angle.

use std::f64::consts::{PI, SQRT_2};

/// Discriminant boundary between the Cardano and trigonometric roots.
const QH_BOUND: f64 = -0.192_450_089_729_875_25; // -sqrt(1/27)

/// NLGP coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nlgp {
    alpha: f64,
    beta: f64,
    kappa: f64,
}

impl Default for Nlgp {
    fn default() -> Self {
        Self::new()
    }
}

impl Nlgp {
    /// Build the normalized coefficients.
    pub fn new() -> Self {
        let tilt = 8.0 * (2.0_f64 / 27.0).sqrt();
        let u0 = (1.0 + SQRT_2).cbrt() / 3.0_f64.sqrt();
        let r0 = u0 + 1.0 / (3.0 * u0);
        let lambda = 2.0 * r0 * r0 - r0.powi(4) + tilt * r0;

        Self {
            alpha: 2.0 / lambda,
            beta: 1.0 / lambda,
            kappa: -tilt / lambda,
        }
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    #[inline]
    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    /// Potential at polar coordinates `(r, φ)`.
    #[inline]
    pub fn polar(&self, r: f64, phi: f64) -> f64 {
        let r2 = r * r;
        -self.alpha * r2 + self.beta * r2 * r2 + self.kappa * phi.sin() * r
    }

    /// Potential at cartesian coordinates `(x, y)`.
    #[inline]
    pub fn euclidean(&self, x: f64, y: f64) -> f64 {
        let r2 = x * x + y * y;
        -self.alpha * r2 + self.beta * r2 * r2 + self.kappa * y
    }

    /// Signed radius of the minimum along the line through the origin at
    /// angle `phi`.
    ///
    /// Angles in `[π, 2π)` map onto the same line as `phi − π`; the returned
    /// radius is then negative.
    pub fn global_minimum_radius(&self, phi: f64) -> f64 {
        let mut phi = phi.rem_euclid(2.0 * PI);
        let mut scalar = 1.0;
        if phi >= PI {
            phi -= PI;
            scalar = -1.0;
        }

        let qh = self.kappa * phi.sin() / (8.0 * self.beta);
        let r0 = if qh <= QH_BOUND {
            let u = (-qh + (qh * qh - 1.0 / 27.0).max(0.0).sqrt()).cbrt();
            u + 1.0 / (3.0 * u)
        } else {
            let arg = (-qh * 27.0_f64.sqrt()).clamp(-1.0, 1.0);
            (4.0_f64 / 3.0).sqrt() * (arg.acos() / 3.0).cos()
        };

        scalar * r0
    }

    /// Minimum of the potential along the line at angle `phi`.
    pub fn global_minimum(&self, phi: f64) -> f64 {
        self.polar(self.global_minimum_radius(phi), phi)
    }

    /// Angle at which the minimum radius switches root branch.
    #[inline]
    pub fn domain_border_angle(&self) -> f64 {
        PI / 4.0
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
