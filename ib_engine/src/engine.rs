//! Simulation engine: fixed per-step pipeline over one owned state.
//!
//! ## Step Order
//! 1. Setpoint schedule (skipped when stationary).
//! 2. Action integration and effective shift.
//! 3. Fatigue.
//! 4. Operational cost delay line and convolution.
//! 5. Miscalibration machine.
//! 6. Consumption.
//! 7. Cost and reward.
//!
//! Every random draw comes from one ChaCha8 stream seeded at construction,
//! so a seed and an action sequence determine the trajectory bit for bit.

use ib_common::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::action::{ActionScales, apply_action};
use crate::dynamics::{
    OperationalCostModel, RewardBreakdown, SetpointScheduler, consumption_update, cost_update,
    fatigue_update, operational_cost_update, reward_breakdown,
};
use crate::goldstone::GoldstoneEnvironment;
use crate::observation::Observation;

/// Number of entries in [`SimulationEngine::markov_vector`].
pub const MARKOV_LEN: usize = COST_BUFFER_LEN + 20;

fn check_setpoint(setpoint: f64) -> Result<(), BenchmarkError> {
    if (PROCESS_MIN..=PROCESS_MAX).contains(&setpoint) {
        Ok(())
    } else {
        Err(BenchmarkError::invalid(format!(
            "setpoint must lie in [{PROCESS_MIN}, {PROCESS_MAX}], got {setpoint}"
        )))
    }
}

/// Industrial benchmark simulation.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    config: BenchmarkConfig,
    scales: ActionScales,
    stationary: bool,
    seed: u64,
    initial_setpoint: f64,
    rng: ChaCha8Rng,
    state: SimulationState,
    setpoint: SetpointScheduler,
    cost_model: OperationalCostModel,
    goldstone: GoldstoneEnvironment,
    steps: u64,
}

impl SimulationEngine {
    /// Stationary engine with the standard configuration at
    /// [`DEFAULT_SETPOINT`].
    pub fn standard(seed: Option<u64>) -> Result<Self, BenchmarkError> {
        Self::new(DEFAULT_SETPOINT, true, seed)
    }

    /// Engine with the standard configuration.
    ///
    /// Without a seed, one is drawn from the thread-local entropy source
    /// and reported by [`Self::seed`]. See [`Self::with_config`] for the
    /// accepted setpoint range.
    pub fn new(
        setpoint: f64,
        stationary: bool,
        seed: Option<u64>,
    ) -> Result<Self, BenchmarkError> {
        Self::with_config(BenchmarkConfig::default(), setpoint, stationary, seed)
    }

    /// Engine with an explicit configuration.
    ///
    /// The setpoint may be anywhere in the closed process range `[0, 100]`,
    /// including 0: a non-stationary schedule clips into the same range and
    /// reaches it, so construction and `reset` accept every setpoint a
    /// running engine can hold.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when the configuration fails validation or
    /// the setpoint is outside `[0, 100]` or not finite.
    pub fn with_config(
        config: BenchmarkConfig,
        setpoint: f64,
        stationary: bool,
        seed: Option<u64>,
    ) -> Result<Self, BenchmarkError> {
        config.validate()?;
        check_setpoint(setpoint)?;

        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let setpoint_scheduler =
            SetpointScheduler::new(config.setpoint.clone(), stationary, &mut rng);
        let goldstone = GoldstoneEnvironment::new(&config.goldstone)?;

        let mut engine = Self {
            scales: ActionScales::from_config(&config.action, &config.goldstone),
            config,
            stationary,
            seed,
            initial_setpoint: setpoint,
            rng,
            state: SimulationState::initial(setpoint),
            setpoint: setpoint_scheduler,
            cost_model: OperationalCostModel::new(),
            goldstone,
            steps: 0,
        };
        engine.step([0.0; 3]);

        debug!(setpoint, stationary, seed, "Simulation engine constructed");
        Ok(engine)
    }

    /// Advance one step with a delta in `[-1, 1]³`. Components outside the
    /// range are clipped.
    pub fn step(&mut self, delta: [f64; 3]) -> &SimulationState {
        let state = &mut self.state;

        state.p = self.setpoint.step(state.p, &mut self.rng);
        apply_action(state, delta, &self.scales);
        fatigue_update(state, &mut self.rng);
        operational_cost_update(&mut self.cost_model, state);

        state.mc = -self.goldstone.state_transition(state.he);
        state.set_goldstone(self.goldstone.machine().state());

        consumption_update(state, &self.config.reward, &mut self.rng);
        cost_update(state, &self.config.reward);

        self.steps += 1;
        trace!(
            step = self.steps,
            p = state.p,
            he = state.he,
            phi_idx = state.gs_phi_idx,
            f = state.f,
            oc = state.oc,
            mc = state.mc,
            c = state.c,
            cost = state.cost,
            "Step"
        );
        &self.state
    }

    /// Start over from `setpoint` with a fresh state and random stream.
    /// `setpoint` follows the range of [`Self::with_config`].
    ///
    /// The configuration, stationarity and penalty table are kept.
    pub fn reset(
        &mut self,
        setpoint: f64,
        seed: Option<u64>,
    ) -> Result<&SimulationState, BenchmarkError> {
        check_setpoint(setpoint)?;

        self.seed = seed.unwrap_or_else(|| rand::rng().random());
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.initial_setpoint = setpoint;
        self.setpoint =
            SetpointScheduler::new(self.config.setpoint.clone(), self.stationary, &mut self.rng);
        self.cost_model.clear();
        self.goldstone.reset();
        self.state = SimulationState::initial(setpoint);
        self.steps = 0;
        self.step([0.0; 3]);

        debug!(setpoint, seed = self.seed, "Simulation engine reset");
        Ok(&self.state)
    }

    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Observable subset `[p, v, g, h, f, c, cost, reward]`.
    #[inline]
    pub fn observation(&self) -> Observation {
        Observation::from(&self.state)
    }

    /// Full Markov state, ordered as
    /// [`MARKOV_NAMES`](ib_common::benchmark::state::MARKOV_NAMES).
    #[inline]
    pub fn markov_vector(&self) -> [f64; MARKOV_LEN] {
        self.state.markov_vector()
    }

    #[inline]
    pub fn reward_breakdown(&self) -> RewardBreakdown {
        reward_breakdown(&self.state, &self.config.reward)
    }

    /// Seed of the current random stream.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.stationary
    }

    /// Setpoint given at construction or the last reset.
    #[inline]
    pub fn initial_setpoint(&self) -> f64 {
        self.initial_setpoint
    }

    /// Steps taken since construction or the last reset, including the
    /// initial zero step.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[inline]
    pub fn setpoint_scheduler(&self) -> &SetpointScheduler {
        &self.setpoint
    }

    #[inline]
    pub fn goldstone(&self) -> &GoldstoneEnvironment {
        &self.goldstone
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
