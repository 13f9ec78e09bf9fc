use std::rc::Rc;

use common::subject_observer::{Observer, Subject};
use log::info;
use rand::Rng;
use subject::ConcreteSubject;

/// Attaches both observers, runs two cycles, detaches the second observer and
/// runs a last cycle. Returns the state reached by each cycle.
pub fn run_scenario(
    subject: &mut ConcreteSubject,
    observer_a: Rc<dyn Observer<i32>>,
    observer_b: Rc<dyn Observer<i32>>,
    rng: &mut impl Rng,
) -> Vec<i32> {
    subject.attach(observer_a);
    subject.attach(observer_b.clone());

    let mut states = vec![
        subject.run_business_logic(rng),
        subject.run_business_logic(rng),
    ];

    subject.detach(&observer_b);

    states.push(subject.run_business_logic(rng));
    info!("Scenario completed with states {states:?}");
    states
}
