use std::rc::Rc;

use common::sink::ConsoleSink;
use log::{error, info};

use crate::{config::app::AppConfig, error::AppError, simulator::DuckSimulator};

mod config;
mod error;
mod simulator;

fn main() -> Result<(), AppError> {
    let app_config = AppConfig::new()?;
    crate::config::log::init(&app_config.log_filter)?;
    info!("Starting duck simulator with configuration: {:?}", app_config);

    let simulator = DuckSimulator::new(app_config, Rc::new(ConsoleSink));
    match simulator.run() {
        Ok(quacks) => {
            info!("Simulation done, {quacks} quacks counted");
            Ok(())
        }
        Err(err) => {
            error!("Simulation failed: {err}");
            Err(err.into())
        }
    }
}
