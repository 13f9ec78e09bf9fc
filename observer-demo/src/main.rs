mod config;
mod demo;

use std::{process::ExitCode, rc::Rc};

use log::{error, info};
use observers::{ConcreteObserverA, ConcreteObserverB};
use rand::thread_rng;
use subject::{ConcreteSubject, SubjectError};
use thiserror::Error;

use crate::config::app::AppConfig;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error(transparent)]
    Subject(#[from] SubjectError),
}

fn build_subject(app_config: &AppConfig) -> Result<ConcreteSubject, AppError> {
    Ok(ConcreteSubject::new(app_config.subject_settings())?)
}

fn run() -> Result<Vec<i32>, AppError> {
    let app_config = AppConfig::new()?;
    let mut subject = build_subject(&app_config)?;

    Ok(demo::run_scenario(
        &mut subject,
        Rc::new(ConcreteObserverA),
        Rc::new(ConcreteObserverB),
        &mut thread_rng(),
    ))
}

fn main() -> ExitCode {
    config::log::init();

    match run() {
        Ok(states) => {
            info!("Done after {} cycles", states.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
