//! Goldstone miscalibration sub-model.
//!
//! A rotating potential whose penalty landscape is selected by a discrete
//! rotation machine driven by the effective shift.

pub mod environment;
pub mod machine;
pub mod nlgp;
pub mod penalty;

pub use environment::GoldstoneEnvironment;
pub use machine::{MiscalibrationMachine, angular_step, fold_phi_idx};
pub use nlgp::Nlgp;
pub use penalty::{PotentialFunction, PotentialTable, RadiusTransform};
