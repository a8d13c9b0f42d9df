//! Goldstone environment: the rotation machine plus the last control
//! position it was driven to.

use ib_common::prelude::*;

use super::machine::MiscalibrationMachine;

#[derive(Debug, Clone)]
pub struct GoldstoneEnvironment {
    machine: MiscalibrationMachine,
    control_position: f64,
}

impl GoldstoneEnvironment {
    pub fn new(config: &GoldstoneConfig) -> Result<Self, BenchmarkError> {
        Ok(Self {
            machine: MiscalibrationMachine::new(config)?,
            control_position: 0.0,
        })
    }

    /// Move to `position`, advance the machine, and return the penalty.
    pub fn state_transition(&mut self, position: f64) -> f64 {
        self.control_position = position;
        self.machine.transition(position);
        self.reward()
    }

    /// Penalty at the current control position.
    #[inline]
    pub fn reward(&self) -> f64 {
        self.machine.reward(self.control_position)
    }

    /// Set the control position without advancing the machine.
    pub fn reset_position(&mut self, position: f64) {
        self.control_position = position;
    }

    /// Machine back to rest, control position back to zero.
    pub fn reset(&mut self) {
        self.machine.reset();
        self.control_position = 0.0;
    }

    #[inline]
    pub fn control_position(&self) -> f64 {
        self.control_position
    }

    #[inline]
    pub fn machine(&self) -> &MiscalibrationMachine {
        &self.machine
    }

    #[inline]
    pub fn machine_mut(&mut self) -> &mut MiscalibrationMachine {
        &mut self.machine
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
