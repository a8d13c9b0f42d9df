//! Simulation state record and the miscalibration state enums.
//!
//! The state is a plain record with named fields. The two Goldstone tags
//! carry their signed weight as the enum discriminant so the ±1 arithmetic
//! of the rotation machine stays exact.

use serde::{Deserialize, Serialize};

use crate::consts::{COST_BUFFER_LEN, INITIAL_CONTROL_VALUE};

// ─── Goldstone Tags ─────────────────────────────────────────────────

/// Side of the potential landscape currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum Domain {
    /// Effective shift last left the safe zone below zero.
    Negative = -1,
    /// Effective shift last left the safe zone above zero.
    #[default]
    Positive = 1,
}

impl Domain {
    /// Signed weight (−1 or +1).
    #[inline]
    pub const fn value(self) -> i32 {
        self as i8 as i32
    }

    /// Domain on the side of `position`. Zero maps to `Positive`.
    #[inline]
    pub fn from_position(position: f64) -> Self {
        if position < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

/// Whether the current rotation direction is favorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum SystemResponse {
    /// Rotation follows the sign of the position.
    #[default]
    Advantageous = 1,
    /// Rotation opposes the sign of the position.
    Disadvantageous = -1,
}

impl SystemResponse {
    /// Signed weight (+1 or −1).
    #[inline]
    pub const fn value(self) -> i32 {
        self as i8 as i32
    }
}

/// Discrete state of the miscalibration machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct GoldstoneState {
    pub domain: Domain,
    pub system_response: SystemResponse,
    /// Rotation index in `[-k, k]`.
    pub phi_idx: i32,
}

impl GoldstoneState {
    /// `(positive, advantageous, 0)`.
    pub const INITIAL: Self = Self {
        domain: Domain::Positive,
        system_response: SystemResponse::Advantageous,
        phi_idx: 0,
    };
}

// ─── Simulation State ───────────────────────────────────────────────

/// Names of the entries of [`SimulationState::markov_vector`], in order.
pub const MARKOV_NAMES: [&str; COST_BUFFER_LEN + 20] = [
    "o0", "o1", "o2", "o3", "o4", "o5", "o6", "o7", "o8", "o9", "coc", "hg", "hv", "he",
    "gs_domain", "gs_sys_response", "gs_phi_idx", "ge", "ve", "MC", "c", "p", "v", "g", "h",
    "f", "fb", "oc", "cost", "reward",
];

/// Complete Markov state of the benchmark, exclusively owned by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Setpoint, `[0,100]`.
    pub p: f64,
    /// Velocity, `[0,100]`.
    pub v: f64,
    /// Gain, `[0,100]`.
    pub g: f64,
    /// Shift, `[0,100]`.
    pub h: f64,
    /// Effective shift in potential coordinates, `[-1.5,1.5]`.
    pub he: f64,
    /// Fatigue.
    pub f: f64,
    /// Base fatigue (without the hysteresis amplification).
    pub fb: f64,
    /// Hidden gain, `[0,5]`.
    pub hg: f64,
    /// Hidden velocity, `[0,5]`.
    pub hv: f64,
    /// Effective gain, `[0,1]`.
    pub ge: f64,
    /// Effective velocity, `[0,1]`.
    pub ve: f64,
    /// Operational-cost delay line, oldest first (index 9 = most recent).
    pub o: [f64; COST_BUFFER_LEN],
    /// Current (unbuffered) operational cost.
    pub coc: f64,
    /// Convolved operational cost.
    pub oc: f64,
    /// Miscalibration reward (negated potential value).
    #[serde(rename = "MC")]
    pub mc: f64,
    /// Noisy consumption.
    pub c: f64,
    /// Total cost.
    pub cost: f64,
    /// Negated total cost.
    pub reward: f64,
    pub gs_domain: Domain,
    pub gs_sys_response: SystemResponse,
    pub gs_phi_idx: i32,
}

impl SimulationState {
    /// State before the initial step: control values at 50, everything else zero.
    pub fn initial(setpoint: f64) -> Self {
        Self {
            p: setpoint,
            v: INITIAL_CONTROL_VALUE,
            g: INITIAL_CONTROL_VALUE,
            h: INITIAL_CONTROL_VALUE,
            he: 0.0,
            f: 0.0,
            fb: 0.0,
            hg: 0.0,
            hv: 0.0,
            ge: 0.0,
            ve: 0.0,
            o: [0.0; COST_BUFFER_LEN],
            coc: 0.0,
            oc: 0.0,
            mc: 0.0,
            c: 0.0,
            cost: 0.0,
            reward: 0.0,
            gs_domain: GoldstoneState::INITIAL.domain,
            gs_sys_response: GoldstoneState::INITIAL.system_response,
            gs_phi_idx: GoldstoneState::INITIAL.phi_idx,
        }
    }

    /// Discrete miscalibration state.
    #[inline]
    pub fn goldstone(&self) -> GoldstoneState {
        GoldstoneState {
            domain: self.gs_domain,
            system_response: self.gs_sys_response,
            phi_idx: self.gs_phi_idx,
        }
    }

    /// Store the discrete miscalibration state.
    #[inline]
    pub fn set_goldstone(&mut self, gs: GoldstoneState) {
        self.gs_domain = gs.domain;
        self.gs_sys_response = gs.system_response;
        self.gs_phi_idx = gs.phi_idx;
    }

    /// Full Markov state as a flat vector, ordered as [`MARKOV_NAMES`].
    pub fn markov_vector(&self) -> [f64; COST_BUFFER_LEN + 20] {
        let mut out = [0.0; COST_BUFFER_LEN + 20];
        out[..COST_BUFFER_LEN].copy_from_slice(&self.o);
        let scalars = [
            self.coc,
            self.hg,
            self.hv,
            self.he,
            f64::from(self.gs_domain.value()),
            f64::from(self.gs_sys_response.value()),
            f64::from(self.gs_phi_idx),
            self.ge,
            self.ve,
            self.mc,
            self.c,
            self.p,
            self.v,
            self.g,
            self.h,
            self.f,
            self.fb,
            self.oc,
            self.cost,
            self.reward,
        ];
        out[COST_BUFFER_LEN..].copy_from_slice(&scalars);
        out
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
