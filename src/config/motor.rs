//! Motor configuration from TOML.

use heapless::{String, Vec};
use serde::Deserialize;

use crate::motor::{DEFAULT_COIL_TABLE, MAX_COIL_STATES};

use super::units::Seconds;

/// Default pause between steps, in seconds.
pub const DEFAULT_STEP_DELAY: Seconds = Seconds(0.05);

/// Default path of the position state file.
pub const DEFAULT_STATE_FILE: &str = "motor_state.ini";

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    #[serde(default = "default_name")]
    pub name: String<32>,

    /// Coil codes for one full revolution, in stepping order.
    #[serde(default = "default_coil_table")]
    pub coil_table: Vec<u8, MAX_COIL_STATES>,

    /// Pause between steps in seconds.
    #[serde(default = "default_step_delay", rename = "step_delay_sec")]
    pub step_delay: Seconds,

    /// Where the last position is persisted.
    #[serde(default = "default_state_file")]
    pub state_file: String<128>,
}

fn default_name() -> String<32> {
    crate::error::message("motor")
}

fn default_coil_table() -> Vec<u8, MAX_COIL_STATES> {
    let mut coil_table = Vec::new();
    for code in DEFAULT_COIL_TABLE {
        // DEFAULT_COIL_TABLE is far below MAX_COIL_STATES
        let _ = coil_table.push(code);
    }
    coil_table
}

fn default_step_delay() -> Seconds {
    DEFAULT_STEP_DELAY
}

fn default_state_file() -> String<128> {
    crate::error::message(DEFAULT_STATE_FILE)
}

impl MotorConfig {
    /// Number of states in one revolution.
    pub fn total_states(&self) -> usize {
        self.coil_table.len()
    }

    /// Degrees turned by a single step.
    pub fn degrees_per_step(&self) -> f64 {
        crate::motion::state_to_angle(1.0, self.total_states())
    }
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            coil_table: default_coil_table(),
            step_delay: DEFAULT_STEP_DELAY,
            state_file: default_state_file(),
        }
    }
}
