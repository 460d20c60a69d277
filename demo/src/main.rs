use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;

use common::{log_error, log_info, log_warn};
use numconv_demo::config::DemoConfig;

mod args;
mod logging;

fn main() -> ExitCode {
    logging::init_logging();
    let args = args::Args::parse();

    let config = DemoConfig::load().unwrap_or_else(|err| {
        log_warn!("Failed to load configurations, using defaults: {}", err);
        DemoConfig::default()
    });
    let pause = config.pause && !args.no_pause;

    match run(pause) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error!("Failed to run the demonstration: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(pause: bool) -> io::Result<()> {
    log_info!("Starting the demonstration");
    {
        let mut out = io::stdout().lock();
        numconv_demo::run(&mut out)?;
        out.flush()?;
    }

    if pause {
        numconv_demo::wait_for_input(&mut io::stdin().lock())?;
    }
    Ok(())
}
