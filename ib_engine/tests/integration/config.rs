//! Integration test: engines built from TOML configuration files.

use std::io::Write;

use ib_common::prelude::*;
use ib_engine::SimulationEngine;
use tempfile::NamedTempFile;

use super::init_tracing;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn engine_from_file(file: &NamedTempFile, seed: u64) -> Result<SimulationEngine, BenchmarkError> {
    let config = BenchmarkConfig::load(file.path())?;
    init_tracing(config.log_level);
    SimulationEngine::with_config(config, 50.0, false, Some(seed))
}

#[test]
fn custom_configuration_runs() {
    let file = write_config(
        r#"
log_level = "debug"

[goldstone]
number_steps = 8
max_required_step = 0.5

[reward]
fatigue_weight = 1.0
consumption_weight = 2.0

[setpoint]
max_sequence_length = 20
"#,
    );
    let mut engine = engine_from_file(&file, 1).unwrap();
    assert_eq!(engine.config().goldstone.number_steps, 8);
    assert_eq!(engine.config().goldstone.safe_zone(), 0.25);
    assert_eq!(engine.config().reward.miscalibration_weight, 25.0);

    for i in 0..500 {
        let x = if (i / 10) % 2 == 0 { 1.0 } else { -1.0 };
        let s = engine.step([0.0, 0.0, x]).clone();
        assert!(s.gs_phi_idx.abs() <= 2);
        assert_eq!(s.cost, s.f + 2.0 * s.c);
        assert!(engine.setpoint_scheduler().state().segment_length < 20);
    }
}

#[test]
fn default_file_matches_default_engine() {
    let file = write_config("");
    let mut from_file = engine_from_file(&file, 3).unwrap();
    let mut default = SimulationEngine::new(50.0, false, Some(3)).unwrap();
    for _ in 0..100 {
        assert_eq!(from_file.step([0.4, -0.1, 0.9]), default.step([0.4, -0.1, 0.9]));
    }
}

#[test]
fn invalid_values_are_rejected() {
    for content in [
        "[goldstone]\nnumber_steps = 6\n",
        "[goldstone]\nmax_required_step = -0.1\n",
        "[goldstone]\nsafe_zone = -1.0\n",
        "[setpoint]\nhold_probability = 1.5\n",
    ] {
        let file = write_config(content);
        assert!(
            matches!(
                engine_from_file(&file, 0),
                Err(BenchmarkError::InvalidConfiguration(_))
            ),
            "accepted: {content}"
        );
    }
}

#[test]
fn load_errors_surface_as_config_errors() {
    let file = write_config("[goldstone\nnumber_steps = ");
    assert!(matches!(
        engine_from_file(&file, 0),
        Err(BenchmarkError::Config(ConfigError::ParseError(_)))
    ));
}
