//! Industrial benchmark simulation engine.
//!
//! A stochastic, discrete-time model of an industrial process for control
//! and reinforcement-learning research. Each step applies a bounded action
//! to velocity, gain and shift, then advances:
//!
//! - **fatigue**: hysteretic noise channels with saturation,
//! - **operational cost**: a delay line convolved with a fixed kernel,
//! - **miscalibration**: a rotating potential selected by a finite-state
//!   machine (the Goldstone dynamics),
//!
//! and combines them into a cost and reward. A seed fixes every random
//! draw; identical seeds and actions give identical trajectories.
//!
//! ```rust
//! use ib_engine::SimulationEngine;
//!
//! let mut engine = SimulationEngine::new(50.0, false, Some(7)).unwrap();
//! let state = engine.step([0.5, -0.5, 0.1]);
//! assert_eq!(state.reward, -state.cost);
//! ```

pub mod action;
pub mod dynamics;
pub mod engine;
pub mod goldstone;
pub mod observation;
pub mod trajectory;

pub use dynamics::RewardBreakdown;
pub use engine::{MARKOV_LEN, SimulationEngine};
pub use observation::{OBSERVABLE_NAMES, Observation};
pub use trajectory::Trajectory;
