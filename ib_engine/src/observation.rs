//! Observable subset of the simulation state.

use ib_common::prelude::*;
use serde::{Deserialize, Serialize};

/// Names of the observable entries, in [`Observation::to_array`] order.
pub const OBSERVABLE_NAMES: [&str; 8] = ["p", "v", "g", "h", "f", "c", "cost", "reward"];

/// Quantities visible to a controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub p: f64,
    pub v: f64,
    pub g: f64,
    pub h: f64,
    pub f: f64,
    pub c: f64,
    pub cost: f64,
    pub reward: f64,
}

impl Observation {
    pub fn to_array(&self) -> [f64; 8] {
        [
            self.p,
            self.v,
            self.g,
            self.h,
            self.f,
            self.c,
            self.cost,
            self.reward,
        ]
    }
}

impl From<&SimulationState> for Observation {
    fn from(state: &SimulationState) -> Self {
        Self {
            p: state.p,
            v: state.v,
            g: state.g,
            h: state.h,
            f: state.f,
            c: state.c,
            cost: state.cost,
            reward: state.reward,
        }
    }
}
