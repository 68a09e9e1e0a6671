//! Unit tests for configuration validation.

use coil_stepper::config::{validate_config, Seconds, StepperConfig};
use coil_stepper::error::{ConfigError, Error};

/// Test validation of the built-in configuration.
#[test]
fn test_default_config_passes_validation() {
    let config = StepperConfig::default();
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for an empty coil table.
#[test]
fn test_empty_table_fails() {
    let toml_str = r#"
[motor]
coil_table = []
"#;

    let config: StepperConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert_eq!(result, Err(Error::Config(ConfigError::EmptyCoilTable)));
}

/// Test validation fails for a step delay that is not a duration.
#[test]
fn test_invalid_step_delay() {
    for bad in [-0.5, f64::NAN, f64::INFINITY] {
        let mut config = StepperConfig::default();
        config.motor.step_delay = Seconds(bad);

        let result = validate_config(&config);
        assert!(
            matches!(result, Err(Error::Config(ConfigError::InvalidStepDelay(_)))),
            "delay {} should be rejected",
            bad
        );
    }
}

/// Test that a zero delay is valid.
#[test]
fn test_zero_delay_is_valid() {
    let mut config = StepperConfig::default();
    config.motor.step_delay = Seconds(0.0);
    assert!(validate_config(&config).is_ok());
}
