//! Recorded trajectories for regression comparison.
//!
//! A trajectory stores the engine parameters, the action sequence and the
//! state after every step. Replaying it on a fresh engine with the same
//! seed must reproduce the recorded states.

use ib_common::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::SimulationEngine;

/// A seeded action sequence and the states it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub seed: u64,
    pub setpoint: f64,
    pub stationary: bool,
    pub config: BenchmarkConfig,
    /// State after construction.
    pub initial: SimulationState,
    pub actions: Vec<[f64; 3]>,
    /// State after each action.
    pub states: Vec<SimulationState>,
}

impl Trajectory {
    /// Run `actions` on `engine` and record the resulting states.
    pub fn record<I>(engine: &mut SimulationEngine, actions: I) -> Self
    where
        I: IntoIterator<Item = [f64; 3]>,
    {
        let initial = engine.state().clone();
        let mut recorded = Vec::new();
        let mut states = Vec::new();
        for delta in actions {
            states.push(engine.step(delta).clone());
            recorded.push(delta);
        }

        Self {
            seed: engine.seed(),
            setpoint: engine.initial_setpoint(),
            stationary: engine.is_stationary(),
            config: engine.config().clone(),
            initial,
            actions: recorded,
            states,
        }
    }

    /// Re-run the recorded actions on a freshly constructed engine.
    pub fn replay(&self) -> Result<Self, BenchmarkError> {
        let mut engine = SimulationEngine::with_config(
            self.config.clone(),
            self.setpoint,
            self.stationary,
            Some(self.seed),
        )?;
        Ok(Self::record(&mut engine, self.actions.iter().copied()))
    }

    /// Largest absolute difference over every Markov entry of every state.
    ///
    /// Trajectories of different lengths compare as infinitely far apart.
    pub fn max_deviation(&self, other: &Self) -> f64 {
        if self.states.len() != other.states.len() {
            return f64::INFINITY;
        }
        std::iter::once((&self.initial, &other.initial))
            .chain(self.states.iter().zip(&other.states))
            .flat_map(|(a, b)| {
                a.markov_vector()
                    .into_iter()
                    .zip(b.markov_vector())
                    .map(|(x, y)| (x - y).abs())
            })
            .fold(0.0, f64::max)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
