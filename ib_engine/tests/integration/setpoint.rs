//! Integration test: non-stationary setpoint schedule inside the engine.

use ib_common::prelude::*;
use ib_engine::SimulationEngine;
use ib_engine::dynamics::SetpointSchedule;

#[test]
fn setpoint_wanders_within_range() {
    let mut engine = SimulationEngine::new(50.0, false, Some(8)).unwrap();
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for _ in 0..10_000 {
        let p = engine.step([0.0; 3]).p;
        assert!((PROCESS_MIN..=PROCESS_MAX).contains(&p));
        min = min.min(p);
        max = max.max(p);
    }
    assert!(max - min > 1.0, "setpoint never moved: [{min}, {max}]");
}

#[test]
fn schedule_advances_once_per_step() {
    let mut engine = SimulationEngine::new(50.0, false, Some(12)).unwrap();
    let before = engine.setpoint_scheduler().state();
    engine.step([0.0; 3]);
    let after = engine.setpoint_scheduler().state();
    if before.position < before.segment_length {
        assert_eq!(after.position, before.position + 1);
        assert_eq!(after.segment_length, before.segment_length);
    } else {
        assert_eq!(after.position, 1);
    }
}

#[test]
fn segment_change_steps_setpoint_by_increment() {
    let mut engine = SimulationEngine::new(50.0, false, Some(6)).unwrap();
    let mut previous = engine.state().p;
    for _ in 0..500 {
        let SetpointSchedule { increment, .. } = engine.setpoint_scheduler().state();
        let p = engine.step([0.0; 3]).p;
        let SetpointSchedule {
            position,
            increment: current,
            ..
        } = engine.setpoint_scheduler().state();
        // inside a segment and away from the bounds the step is the increment
        if position > 1 && current == increment && p > 0.0 && p < 100.0 {
            assert!((p - previous - increment).abs() < 1e-9);
        }
        previous = p;
    }
}
