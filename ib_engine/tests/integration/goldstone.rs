//! Integration test: miscalibration machine driven through the engine.

use ib_common::prelude::*;
use ib_engine::SimulationEngine;
use ib_engine::goldstone::{MiscalibrationMachine, PotentialTable, fold_phi_idx};
use proptest::prelude::*;

#[test]
fn returning_to_the_safe_zone_resets_the_machine() {
    let mut engine = SimulationEngine::new(50.0, true, Some(21)).unwrap();
    assert!(engine.state().he.abs() < 1e-12);

    for _ in 0..5 {
        engine.step([0.0, 0.0, 1.0]);
    }
    let away = engine.state().clone();
    assert!(away.he > engine.goldstone().machine().safe_zone());
    assert_ne!(away.gs_phi_idx, 0);

    for _ in 0..5 {
        engine.step([0.0, 0.0, -1.0]);
    }
    assert!(engine.state().he.abs() <= engine.goldstone().machine().safe_zone());

    for _ in 0..20 {
        engine.step([0.0; 3]);
    }
    assert_eq!(engine.state().goldstone(), GoldstoneState::INITIAL);
}

#[test]
fn miscalibration_reward_is_negated_penalty() {
    let mut engine = SimulationEngine::new(50.0, true, Some(4)).unwrap();
    for _ in 0..8 {
        let s = engine.step([0.0, 0.0, 0.7]).clone();
        let machine = engine.goldstone().machine();
        assert_eq!(s.mc, -machine.reward(s.he));
        assert!(-s.mc >= machine.optimal_reward() - 1e-12);
    }
}

#[test]
fn optimum_magnitude_is_bounded_by_required_step() {
    let mrs = ib_common::consts::default_max_required_step();
    let table = PotentialTable::new(24, mrs).unwrap();
    let k = table.strongest_penalty_idx();
    for j in -k..=k {
        let f = table.get(j);
        let r = f.optimum_radius().abs();
        assert!(r >= mrs - 1e-15 && r <= 1.0 + 1e-15, "j={j} r={r}");
        assert!(f.optimum_value() >= -1.0 - 1e-12);
    }
}

#[test]
fn penalty_is_continuous_in_position() {
    let mrs = ib_common::consts::default_max_required_step();
    let table = PotentialTable::new(24, mrs).unwrap();
    for j in -6..=6 {
        let f = table.get(j);
        let mut prev = f.reward(-1.5);
        for i in 1..=3000 {
            let x = -1.5 + f64::from(i) * 1e-3;
            let cur = f.reward(x);
            assert!((cur - prev).abs() < 0.05, "j={j} jump at x={x}");
            prev = cur;
        }
    }
}

proptest! {
    #[test]
    fn fold_is_idempotent(phi_idx in -1000i32..1000, quarter in 1i32..20) {
        let once = fold_phi_idx(phi_idx, quarter);
        prop_assert!(once.abs() <= quarter);
        prop_assert_eq!(fold_phi_idx(once, quarter), once);
    }

    #[test]
    fn machine_index_stays_in_range(
        positions in prop::collection::vec(-1.5..1.5f64, 1..300),
    ) {
        let mut machine = MiscalibrationMachine::new(&GoldstoneConfig::default()).unwrap();
        let k = machine.strongest_penalty_idx();
        for x in positions {
            machine.transition(x);
            prop_assert!(machine.phi_idx().abs() <= k);
        }
    }
}
