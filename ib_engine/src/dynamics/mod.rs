//! Per-step sub-models of the benchmark.
//!
//! Each sub-model is a free function over the shared [`SimulationState`]
//! plus, where it needs one, a small owned component (the delay line, the
//! setpoint schedule). The engine calls them in a fixed order.
//!
//! [`SimulationState`]: ib_common::benchmark::state::SimulationState

pub mod effective;
pub mod fatigue;
pub mod operational_cost;
pub mod reward;
pub mod setpoint;

pub use effective::EffectiveAction;
pub use fatigue::fatigue_update;
pub use operational_cost::{OperationalCostModel, operational_cost_update};
pub use reward::{RewardBreakdown, consumption_update, cost_update, reward_breakdown};
pub use setpoint::{SetpointSchedule, SetpointScheduler};
