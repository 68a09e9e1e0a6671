use std::process::ExitCode;

use clap::Parser;
use coil_stepper::cli::{self, Args};
use log::{error, info};

fn main() -> ExitCode {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter(None, log::LevelFilter::Debug);
    } else {
        builder.filter(None, log::LevelFilter::Info);
    }
    builder.init();

    let plan = match args.plan() {
        Ok(plan) => plan,
        Err(e) => e.exit(),
    };

    match cli::run(&args, plan) {
        Ok(Some(state)) => {
            info!("Motor now at state {}", state);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
