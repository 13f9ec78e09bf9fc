use std::{rc::Rc, thread};

use common::subject_observer::{
    dispatch, remove_first, Observer, SharedObservers, StateReader, Subject,
};
use log::{debug, info};
use rand::Rng;
use validator::Validate;

use crate::{SubjectError, SubjectSettings};

/// Holds a state every observer cares about and notifies them each time the
/// business logic changes it.
pub struct ConcreteSubject {
    state: i32,
    observers: SharedObservers<i32>,
    settings: SubjectSettings,
}

impl StateReader<i32> for ConcreteSubject {
    fn state(&self) -> i32 {
        self.state
    }
}

impl Subject<i32> for ConcreteSubject {
    fn attach(&mut self, observer: Rc<dyn Observer<i32>>) {
        info!("Subject: Attached an observer.");
        self.observers.push(observer);
    }

    fn detach(&mut self, observer: &Rc<dyn Observer<i32>>) {
        if !remove_first(&mut self.observers, observer) {
            debug!("Subject: Observer to detach was not attached.");
        }
        info!("Subject: Detached an observer.");
    }

    fn notify(&self) {
        info!("Subject: Notifying observers...");
        dispatch(&self.observers, self);
    }
}

impl ConcreteSubject {
    pub fn new(settings: SubjectSettings) -> Result<Self, SubjectError> {
        settings.validate().map_err(SubjectError::InvalidSettings)?;
        Ok(ConcreteSubject {
            state: 0,
            observers: vec![],
            settings,
        })
    }

    pub fn settings(&self) -> &SubjectSettings {
        &self.settings
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Draws a new state, waits for the configured latency, then notifies the
    /// observers. Returns the new state.
    pub fn run_business_logic(&mut self, rng: &mut impl Rng) -> i32 {
        info!("Subject: I'm doing something important.");
        self.state = rng.gen_range(0..self.settings.state_upper_bound);

        thread::sleep(self.settings.latency());

        info!("Subject: My state has just changed to: {}", self.state);
        self.notify();
        self.state
    }
}
