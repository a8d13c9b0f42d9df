//! Piecewise-linear setpoint schedule.
//!
//! The setpoint follows random-length segments of constant increment.
//! A segment that would leave `[0, 100]` may reflect its increment;
//! the value is clipped either way.

use ib_common::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Position within the current setpoint segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetpointSchedule {
    /// Steps in the current segment, `[1, max_sequence_length)`.
    pub segment_length: u32,
    /// Steps already taken in the current segment.
    pub position: u32,
    /// Setpoint change per step.
    pub increment: f64,
}

/// Random setpoint scheduler. Inactive when stationary.
#[derive(Debug, Clone)]
pub struct SetpointScheduler {
    config: SetpointConfig,
    stationary: bool,
    schedule: SetpointSchedule,
}

impl SetpointScheduler {
    /// Create a scheduler and draw its first segment.
    ///
    /// The first segment is drawn even when stationary so the random
    /// stream is aligned across modes.
    pub fn new<R: Rng + ?Sized>(config: SetpointConfig, stationary: bool, rng: &mut R) -> Self {
        let schedule = draw_segment(&config, rng);
        Self {
            config,
            stationary,
            schedule,
        }
    }

    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.stationary
    }

    /// Current segment.
    #[inline]
    pub fn state(&self) -> SetpointSchedule {
        self.schedule
    }

    /// Replace the current segment.
    pub fn restore(&mut self, schedule: SetpointSchedule) {
        self.schedule = schedule;
    }

    /// Advance the setpoint one step. Returns `setpoint` unchanged when
    /// stationary.
    pub fn step<R: Rng + ?Sized>(&mut self, setpoint: f64, rng: &mut R) -> f64 {
        if self.stationary {
            return setpoint;
        }

        if self.schedule.position == self.schedule.segment_length {
            self.schedule = draw_segment(&self.config, rng);
            trace!(
                segment_length = self.schedule.segment_length,
                increment = self.schedule.increment,
                "New setpoint segment"
            );
        }

        let mut next = setpoint + self.schedule.increment;
        if !(PROCESS_MIN..=PROCESS_MAX).contains(&next) && rng.random::<f64>() > 0.5 {
            self.schedule.increment = -self.schedule.increment;
        }
        next = next.clamp(PROCESS_MIN, PROCESS_MAX);

        self.schedule.position += 1;
        next
    }
}

/// Draw a fresh segment: length, increment, then the hold decision.
fn draw_segment<R: Rng + ?Sized>(config: &SetpointConfig, rng: &mut R) -> SetpointSchedule {
    let segment_length = rng.random_range(1..config.max_sequence_length);
    let mut increment = (2.0 * rng.random::<f64>() - 1.0) * config.max_change_rate;
    if rng.random::<f64>() < config.hold_probability {
        increment = 0.0;
    }

    SetpointSchedule {
        segment_length,
        position: 0,
        increment,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
