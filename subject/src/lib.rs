mod concrete_subject;

use std::time::Duration;

pub use concrete_subject::ConcreteSubject;

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

const DEFAULT_LATENCY_MS: u64 = 15;
const DEFAULT_STATE_UPPER_BOUND: i32 = 10;

#[derive(Error, Debug)]
pub enum SubjectError {
    #[error("Invalid subject settings: {0}")]
    InvalidSettings(ValidationErrors),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct SubjectSettings {
    /// Simulated processing time between the state change and its announcement.
    pub latency_ms: u64,
    /// Exclusive upper bound of the states drawn by the business logic.
    #[validate(range(min = 1))]
    pub state_upper_bound: i32,
}

impl SubjectSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for SubjectSettings {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
            state_upper_bound: DEFAULT_STATE_UPPER_BOUND,
        }
    }
}
