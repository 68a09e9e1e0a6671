//! Unit tests for TOML configuration parsing.

use coil_stepper::config::{parse_config, StepperConfig};
use coil_stepper::{CoilMotorBuilder, CoilTable, Seconds};

/// Test parsing a valid motor configuration from TOML.
#[test]
fn test_parse_motor_config() {
    let toml_str = r#"
[motor]
name = "dial"
coil_table = [0x01, 0x03, 0x02, 0x06, 0x04, 0x0C, 0x08, 0x09]
step_delay_sec = 0.01
state_file = "dial.ini"
"#;

    let config: StepperConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.motor.name.as_str(), "dial");
    assert_eq!(config.motor.total_states(), 8);
    assert_eq!(config.motor.coil_table[5], 0x0C);
    assert_eq!(config.motor.step_delay, Seconds(0.01));
    assert_eq!(config.motor.state_file.as_str(), "dial.ini");
    assert_eq!(config.motor.degrees_per_step(), 45.0);
}

/// Test that a configured table drives the motor.
#[test]
fn test_configured_table_reaches_motor() {
    let toml_str = r#"
[motor]
coil_table = [0x09, 0x0C, 0x06, 0x03]
step_delay_sec = 0.0
"#;

    let config = parse_config(toml_str).expect("Config should be valid");
    let motor = CoilMotorBuilder::new()
        .from_config(&config)
        .unwrap()
        .writer(coil_stepper::output::CountingWriter::new())
        .delay(coil_stepper::motor::NoDelay)
        .build()
        .unwrap();

    assert_eq!(
        motor.coil_table(),
        &CoilTable::new(&[0x09u8, 0x0C, 0x06, 0x03]).unwrap()
    );
    assert_eq!(motor.total_states(), 4);
}

/// Test that a table over capacity is rejected by the parser.
#[test]
fn test_oversized_table_rejected() {
    let codes: Vec<String> = (0..300).map(|i| (i % 16).to_string()).collect();
    let toml_str = format!("[motor]\ncoil_table = [{}]\n", codes.join(", "));

    assert!(parse_config(&toml_str).is_err());
}

/// Test that unknown step delay units are not silently accepted.
#[test]
fn test_delay_must_be_a_number() {
    let toml_str = r#"
[motor]
coil_table = [0x01]
step_delay_sec = "fast"
"#;

    assert!(parse_config(toml_str).is_err());
}
