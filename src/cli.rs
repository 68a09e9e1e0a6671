//! Command line front end.
//!
//! Parses the tool's arguments, resolves them against the configuration and
//! runs a single turn, persisting the resulting position.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use embedded_hal::delay::DelayNs;

use crate::config::units::{Cycles, Degrees, Seconds};
use crate::config::{load_config, StepperConfig};
use crate::error::{message, ConfigError, Error, Result};
use crate::motor::{CoilMotorBuilder, CoilTable, NoDelay, StdDelay};
use crate::output::{ByteSinkWriter, CoilWriter, CountingWriter};
use crate::store::{load_or_init, FileStore, MemoryStore, PositionStore};

const EXAMPLES: &str = "\
Examples:
  Turn the motor 1.3 turns anti-clockwise, slowly:
    coil-stepper --cycle -1.3 --delay 0.5

  Turn the motor 180 degrees clockwise from its current position:
    coil-stepper --rotate 180

  Turn the motor to the absolute angle 0:
    coil-stepper --angle 0";

/// Control the position of a stepper motor on a parallel port.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
#[command(group(ArgGroup::new("motion").args(["cycle", "rotate", "angle"]).multiple(false)))]
pub struct Args {
    /// Revolutions to turn; negative turns counter-clockwise
    #[arg(short, long, allow_negative_numbers = true)]
    pub cycle: Option<f64>,

    /// Degrees to rotate from the current position; negative turns counter-clockwise
    #[arg(short, long, allow_negative_numbers = true)]
    pub rotate: Option<f64>,

    /// Absolute angle to turn to, 0-360 degrees
    #[arg(short, long, allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Seconds between steps, controls the speed [default: 0.05]
    #[arg(short, long)]
    pub delay: Option<f64>,

    /// List the coil codes and their angles, then exit
    #[arg(short, long)]
    pub list: bool,

    /// File holding the motor position [default: motor_state.ini]
    #[arg(long, alias = "state_file")]
    pub state_file: Option<PathBuf>,

    /// Forget the stored position (back to 0 degrees) before anything else
    #[arg(long)]
    pub reset: bool,

    /// TOML motor configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Device the coil codes are written to; without it nothing is driven
    #[arg(long)]
    pub port: Option<PathBuf>,

    /// Log every step
    #[arg(short, long)]
    pub verbose: bool,
}

/// A requested movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Relative revolutions.
    Cycles(Cycles),
    /// Relative angle.
    Rotate(Degrees),
    /// Absolute angle.
    Angle(Degrees),
}

/// What a run of the tool does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Plan {
    /// Print the coil table.
    List,
    /// Delete the state file and stop.
    Reset,
    /// Turn the motor, optionally after deleting the state file.
    Turn {
        /// Movement to perform.
        motion: Motion,
        /// Start from state 0 regardless of the stored position.
        reset: bool,
    },
}

impl Args {
    /// The movement requested, if any. At most one can be given.
    pub fn motion(&self) -> Option<Motion> {
        match (self.cycle, self.rotate, self.angle) {
            (Some(cycles), _, _) => Some(Motion::Cycles(Cycles(cycles))),
            (_, Some(rotate), _) => Some(Motion::Rotate(Degrees(rotate))),
            (_, _, Some(angle)) => Some(Motion::Angle(Degrees(angle))),
            _ => None,
        }
    }

    /// Decide what to do.
    ///
    /// # Errors
    ///
    /// A usage error if there is nothing to do.
    pub fn plan(&self) -> core::result::Result<Plan, clap::Error> {
        if self.list {
            return Ok(Plan::List);
        }
        match (self.motion(), self.reset) {
            (Some(motion), reset) => Ok(Plan::Turn { motion, reset }),
            (None, true) => Ok(Plan::Reset),
            (None, false) => Err(Args::command().error(
                ErrorKind::MissingRequiredArgument,
                "one of --cycle, --rotate or --angle is required",
            )),
        }
    }

    /// Configuration file contents merged with the command line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded.
    pub fn resolve_config(&self) -> Result<StepperConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => StepperConfig::default(),
        };
        if let Some(delay) = self.delay {
            config.motor.step_delay = Seconds(delay);
        }
        if let Some(path) = &self.state_file {
            config.motor.state_file = message(&path.to_string_lossy());
        }
        Ok(config)
    }
}

/// Write one line per state: index, angle and code.
pub fn write_positions<O: Write>(out: &mut O, table: &CoilTable<u8>) -> io::Result<()> {
    writeln!(out, "Motor positions:")?;
    for (state, angle, code) in table.positions() {
        writeln!(out, "{:2} : {:6.2} deg : {:#04x}", state, angle.value(), code)?;
    }
    Ok(())
}

/// Coil writer that logs every code before passing it on.
#[derive(Debug)]
pub struct LoggingWriter<W> {
    inner: W,
    steps: u64,
}

impl<W> LoggingWriter<W> {
    /// Wrap `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner, steps: 0 }
    }

    /// Number of codes passed on.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl<W: CoilWriter<u8>> CoilWriter<u8> for LoggingWriter<W> {
    type Error = W::Error;

    fn write(&mut self, code: u8) -> core::result::Result<(), Self::Error> {
        log::debug!("{:03} : coil code {:#04x}", self.steps + 1, code);
        self.inner.write(code).map_err(|e| {
            log::error!("Writing coil code {:#04x} failed: {:?}", code, e);
            e
        })?;
        self.steps += 1;
        Ok(())
    }
}

fn open_port(path: &Path) -> Result<ByteSinkWriter<File>> {
    let file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| Error::Config(ConfigError::IoError(message(&e.to_string()))))?;
    Ok(ByteSinkWriter::new(file))
}

/// Run one turn against `writer` and persist the result.
///
/// The reached state is saved even when the writer fails part way.
pub fn turn<W, S, D>(
    config: &StepperConfig,
    store: &mut S,
    motion: Motion,
    writer: W,
    delay: D,
) -> Result<usize>
where
    W: CoilWriter<u8>,
    S: PositionStore,
    D: DelayNs,
{
    let state = load_or_init(store)?;

    let mut motor = CoilMotorBuilder::new()
        .from_config(config)?
        .writer(LoggingWriter::new(writer))
        .delay(delay)
        .state(state)
        .build()?;

    log::info!(
        "Motor '{}' at state {} ({:.2} deg)",
        motor.name(),
        motor.state(),
        motor.angle().value()
    );

    let result = match motion {
        Motion::Cycles(cycles) => motor.turn_by_cycles(cycles),
        Motion::Rotate(relative) => motor.rotate_by(relative),
        Motion::Angle(angle) => motor.turn_by_angle(angle),
    };

    // Whatever was reached is where the motor physically is.
    store.save(motor.state())?;
    let new_state = result?;

    log::info!(
        "Moved {} steps to state {} ({:.2} deg)",
        motor.writer().steps(),
        new_state,
        motor.angle().value()
    );
    Ok(new_state)
}

/// Simulate a turn without hardware.
///
/// Starts from the stored position but never saves, so the store still
/// describes where the motor physically is. No time is spent between steps.
pub fn dry_run<S: PositionStore>(
    config: &StepperConfig,
    store: &mut S,
    motion: Motion,
) -> Result<usize> {
    let start = store.load()?.unwrap_or(0);
    let mut scratch = MemoryStore::with_state(start);
    let state = turn(config, &mut scratch, motion, CountingWriter::new(), NoDelay)?;
    log::info!("Dry run, stored position left at state {}", start);
    Ok(state)
}

/// Execute the plan described by `args`.
///
/// Returns the new state when the motor was turned.
///
/// # Errors
///
/// Returns configuration, store and device errors.
pub fn run(args: &Args, plan: Plan) -> Result<Option<usize>> {
    let config = args.resolve_config()?;
    let mut store = FileStore::new(config.motor.state_file.as_str());

    let motion = match plan {
        Plan::List => {
            let table = CoilTable::new(&config.motor.coil_table)?;
            let stdout = io::stdout();
            write_positions(&mut stdout.lock(), &table)
                .map_err(|e| Error::Config(ConfigError::IoError(message(&e.to_string()))))?;
            return Ok(None);
        }
        Plan::Reset => {
            store.reset()?;
            return Ok(None);
        }
        Plan::Turn { motion, reset } => {
            if reset {
                store.reset()?;
            }
            motion
        }
    };

    let new_state = match &args.port {
        Some(path) => turn(&config, &mut store, motion, open_port(path)?, StdDelay)?,
        None => {
            log::warn!("No --port given, dry run");
            dry_run(&config, &mut store, motion)?
        }
    };
    Ok(Some(new_state))
}
